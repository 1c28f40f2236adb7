// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Template tree.
//!
//! A typed representation of the TypeScript module produced by the host's
//! base templates. It covers exactly what the augmentation steps need to
//! look at or mutate: imports, classes, decorators, constructors, methods and
//! the expressions that appear in decorator arguments and method bodies.
//! Anything else is carried verbatim in [`Statement::Raw`] /
//! [`Expression::Raw`].
//!
//! # Module Structure
//!
//! ```text
//! ast.rs         — node types
//! ast/
//! ├── build.rs   — node constructors (identifiers, imports, decorators)
//! ├── visit.rs   — mutable visitor with default walkers
//! └── render.rs  — Display impls printing TypeScript-like source
//! ```
//!
//! # Placeholders
//!
//! Templates carry unresolved slots in two positions:
//!
//! | Position | Node | Example source |
//! |----------|------|----------------|
//! | expression | [`Expression::Placeholder`] | `create(${CREATE_ARGS_MAPPING})` |
//! | identifier | [`Name::Placeholder`] | `async ${FIND_MANY}(...)` |
//!
//! Both are resolved by [`crate::template::interpolate`].

pub mod build;
mod render;
pub mod visit;

use std::fmt;

/// Plain identifier (`UserService`, `passwordService`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Create an identifier from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Identifier text.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A node in identifier position that may still be a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Name {
    /// Resolved identifier.
    Ident(Identifier),
    /// Unresolved template slot, keyed by mapping name.
    Placeholder(String)
}

impl Name {
    /// Resolved identifier, if any.
    pub fn ident(&self) -> Option<&Identifier> {
        match self {
            Self::Ident(id) => Some(id),
            Self::Placeholder(_) => None
        }
    }

    /// Exact match against a resolved identifier.
    ///
    /// Placeholders never match.
    pub fn is(&self, name: &str) -> bool {
        self.ident().is_some_and(|id| id.name() == name)
    }
}

impl From<Identifier> for Name {
    fn from(value: Identifier) -> Self {
        Self::Ident(value)
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self::Ident(Identifier::new(value))
    }
}

/// A parsed module.
///
/// Classes can only be reached mutably after interpolation:
///
/// ```compile_fail
/// let mut program = auth_codegen_core::ast::Program::default();
/// let _ = program.classes_mut();
/// ```
///
/// ```
/// use auth_codegen_core::{ast::Program, template::{TemplateMapping, interpolate}};
///
/// let mut program = Program::default();
/// let mut template = interpolate(&mut program, &TemplateMapping::new());
/// assert!(template.class_mut("UserControllerBase").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// Top-level statements in source order.
    pub body: Vec<Statement>
}

impl Program {
    /// Create a program from its statements.
    pub fn new(body: Vec<Statement>) -> Self {
        Self {
            body
        }
    }

    /// Iterate over top-level import declarations.
    pub fn imports(&self) -> impl Iterator<Item = &ImportDeclaration> {
        self.body.iter().filter_map(|stmt| match stmt {
            Statement::Import(import) => Some(import),
            _ => None
        })
    }

    /// Iterate over top-level classes, exported or not.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDeclaration> {
        self.body.iter().filter_map(|stmt| match stmt {
            Statement::Class(class) => Some(class),
            _ => None
        })
    }

    /// Mutable iteration over top-level classes. Outside the crate, classes
    /// are reached through [`crate::template::InterpolatedTemplate`].
    pub(crate) fn classes_mut(&mut self) -> impl Iterator<Item = &mut ClassDeclaration> {
        self.body.iter_mut().filter_map(|stmt| match stmt {
            Statement::Class(class) => Some(class),
            _ => None
        })
    }
}

/// Statement, at module level or inside a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `import ... from "..."`.
    Import(ImportDeclaration),
    /// Class declaration, optionally exported.
    Class(ClassDeclaration),
    /// Expression statement (`super(prisma);`).
    Expression(Expression),
    /// `return <expr>;`
    Return(Option<Expression>),
    /// `const <name> = <init>;`
    Const {
        /// Binding name.
        name: Name,
        /// Initializer.
        init: Expression
    },
    /// Verbatim source that no step inspects.
    Raw(String)
}

/// Import declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDeclaration {
    /// Imported bindings.
    pub specifiers:       Vec<ImportSpecifier>,
    /// Module specifier (`"@nestjs/common"`, `"../../auth/acl.module"`).
    pub source:           String,
    /// Line comments printed above the declaration, without `//`.
    pub leading_comments: Vec<String>
}

impl ImportDeclaration {
    /// Names this declaration binds, paired with its source.
    ///
    /// Named specifiers contribute the imported name; default and namespace
    /// specifiers contribute their local name.
    pub fn bound_names(&self) -> impl Iterator<Item = &str> {
        self.specifiers.iter().map(ImportSpecifier::imported_name)
    }
}

/// One binding of an import declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportSpecifier {
    /// `{ imported }` or `{ imported as local }`.
    Named {
        /// Exported name in the source module.
        imported: Identifier,
        /// Local alias, if different.
        local:    Option<Identifier>
    },
    /// `import local from "..."`.
    Default(Identifier),
    /// `import * as local from "..."`.
    Namespace(Identifier)
}

impl ImportSpecifier {
    /// Name used for duplicate detection.
    pub fn imported_name(&self) -> &str {
        match self {
            Self::Named {
                imported, ..
            } => imported.name(),
            Self::Default(local) | Self::Namespace(local) => local.name()
        }
    }
}

/// Class declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclaration {
    /// Class name; may still be a placeholder before interpolation.
    pub id:          Name,
    /// `extends` clause.
    pub super_class: Option<Name>,
    /// Class-level decorators.
    pub decorators:  Vec<Decorator>,
    /// Members in declaration order.
    pub body:        Vec<ClassMember>,
    /// Whether the declaration is prefixed with `export`.
    pub exported:    bool
}

impl ClassDeclaration {
    /// Iterate over methods, including the constructor.
    pub fn methods(&self) -> impl Iterator<Item = &ClassMethod> {
        self.body.iter().filter_map(|member| match member {
            ClassMember::Method(method) => Some(method),
            ClassMember::Property(_) => None
        })
    }

    /// Mutable iteration over methods, including the constructor.
    pub fn methods_mut(&mut self) -> impl Iterator<Item = &mut ClassMethod> {
        self.body.iter_mut().filter_map(|member| match member {
            ClassMember::Method(method) => Some(method),
            ClassMember::Property(_) => None
        })
    }

    /// The constructor, if declared.
    pub fn constructor_mut(&mut self) -> Option<&mut ClassMethod> {
        self.methods_mut()
            .find(|method| method.kind == MethodKind::Constructor)
    }

    /// Class name for diagnostics.
    pub fn display_name(&self) -> String {
        match &self.id {
            Name::Ident(id) => id.name().to_string(),
            Name::Placeholder(key) => format!("${{{key}}}")
        }
    }
}

/// Member of a class body.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    /// Method or constructor.
    Method(ClassMethod),
    /// Field declaration.
    Property(ClassProperty)
}

/// Method kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodKind {
    /// Regular method.
    #[default]
    Method,
    /// `constructor(...)`.
    Constructor
}

/// Class method.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMethod {
    /// Method name. Constructors use `constructor`.
    pub key:         Name,
    /// Method or constructor.
    pub kind:        MethodKind,
    /// Parameters in order.
    pub params:      Vec<Param>,
    /// Body statements.
    pub body:        Vec<Statement>,
    /// Method decorators, outermost first.
    pub decorators:  Vec<Decorator>,
    /// `async` modifier.
    pub is_async:    bool,
    /// Declared return type.
    pub return_type: Option<TypeRef>
}

impl ClassMethod {
    /// Constructor taking the given parameters and body.
    pub fn constructor(params: Vec<Param>, body: Vec<Statement>) -> Self {
        Self {
            key: Name::from("constructor"),
            kind: MethodKind::Constructor,
            params,
            body,
            decorators: Vec::new(),
            is_async: false,
            return_type: None
        }
    }

    /// Regular method with an empty body.
    pub fn method(key: impl Into<Name>) -> Self {
        Self {
            key:         key.into(),
            kind:        MethodKind::Method,
            params:      Vec::new(),
            body:        Vec::new(),
            decorators:  Vec::new(),
            is_async:    false,
            return_type: None
        }
    }
}

/// Class field.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassProperty {
    /// Field name.
    pub key:             Name,
    /// Declared type.
    pub type_annotation: Option<TypeRef>,
    /// Initializer.
    pub value:           Option<Expression>,
    /// Field decorators.
    pub decorators:      Vec<Decorator>
}

/// Visibility modifier of a constructor parameter property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private
}

impl Accessibility {
    /// Keyword as written in source.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private"
        }
    }
}

/// Function or constructor parameter.
///
/// A parameter with `accessibility` set is a parameter property: it also
/// declares a class field of the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Binding name.
    pub name:            Name,
    /// Declared type.
    pub type_annotation: Option<TypeRef>,
    /// Visibility modifier for parameter properties.
    pub accessibility:   Option<Accessibility>,
    /// Parameter decorators (`@common.Body()`).
    pub decorators:      Vec<Decorator>
}

impl Param {
    /// Untyped parameter.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name:            name.into(),
            type_annotation: None,
            accessibility:   None,
            decorators:      Vec::new()
        }
    }

    /// Attach a type annotation.
    #[must_use]
    pub fn typed(mut self, ty: TypeRef) -> Self {
        self.type_annotation = Some(ty);
        self
    }

    /// Turn the parameter into a parameter property.
    #[must_use]
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }
}

/// Type reference, e.g. `PasswordService` or `Promise<User[]>`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRef {
    /// Referenced type name.
    pub name:      Name,
    /// Generic arguments.
    pub arguments: Vec<TypeRef>,
    /// Trailing `[]`.
    pub array:     bool
}

impl TypeRef {
    /// Non-generic reference.
    pub fn named(name: impl Into<Name>) -> Self {
        Self {
            name:      name.into(),
            arguments: Vec::new(),
            array:     false
        }
    }
}

/// Decorator application `@<expression>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorator {
    /// Decorator expression, usually a call.
    pub expression: Expression
}

impl Decorator {
    /// Wrap an expression.
    pub fn new(expression: Expression) -> Self {
        Self {
            expression
        }
    }
}

/// Logical operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    /// `&&`
    And,
    /// `||`
    Or,
    /// `??`
    Nullish
}

impl LogicalOperator {
    /// Operator token.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
            Self::Nullish => "??"
        }
    }
}

/// Expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Identifier reference.
    Identifier(Identifier),
    /// Unresolved template slot.
    Placeholder(String),
    /// String literal.
    StringLiteral(String),
    /// `this`
    This,
    /// `super`
    Super,
    /// `[a, b]`
    Array(Vec<Expression>),
    /// `{ key: value, ...spread }`
    Object(Vec<ObjectMember>),
    /// Non-computed member access `object.property`.
    Member {
        /// Accessed object.
        object:   Box<Expression>,
        /// Property name.
        property: Name
    },
    /// Call `callee(arguments)`.
    Call {
        /// Called expression.
        callee:    Box<Expression>,
        /// Arguments in order.
        arguments: Vec<Expression>
    },
    /// Arrow function with an expression body.
    Arrow {
        /// Parameters.
        params:   Vec<Param>,
        /// Expression body.
        body:     Box<Expression>,
        /// `async` modifier.
        is_async: bool
    },
    /// `await <expr>`
    Await(Box<Expression>),
    /// `left <op> right`
    Logical {
        /// Operator.
        operator: LogicalOperator,
        /// Left operand.
        left:     Box<Expression>,
        /// Right operand.
        right:    Box<Expression>
    },
    /// Verbatim source.
    Raw(String)
}

impl Expression {
    /// Identifier expression.
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier::new(name))
    }
}

impl From<Identifier> for Expression {
    fn from(value: Identifier) -> Self {
        Self::Identifier(value)
    }
}

/// Member of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectMember {
    /// `key: value`
    Property {
        /// Property key.
        key:   Name,
        /// Property value.
        value: Expression
    },
    /// `...expr`
    Spread(Expression)
}
