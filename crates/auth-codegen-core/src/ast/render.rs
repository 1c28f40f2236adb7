// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! TypeScript-like rendering.
//!
//! The host owns real serialization. This printer exists so a mutated tree
//! can be inspected in logs and asserted on in tests. Output is stable:
//! two-space indentation, one member per line, no trailing whitespace.

use std::fmt::{self, Display, Formatter};

use super::{
    ClassDeclaration, ClassMember, ClassMethod, ClassProperty, Decorator, Expression,
    ImportDeclaration, ImportSpecifier, MethodKind, Name, ObjectMember, Param, Program, Statement,
    TypeRef
};

const INDENT: &str = "  ";

fn join<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(id) => write!(f, "{id}"),
            Self::Placeholder(key) => write!(f, "${{{key}}}")
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for stmt in &self.body {
            writeln!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Import(import) => write!(f, "{import}"),
            Self::Class(class) => write!(f, "{class}"),
            Self::Expression(expr) => write!(f, "{expr};"),
            Self::Return(Some(expr)) => write!(f, "return {expr};"),
            Self::Return(None) => f.write_str("return;"),
            Self::Const {
                name,
                init
            } => write!(f, "const {name} = {init};"),
            Self::Raw(source) => f.write_str(source)
        }
    }
}

impl Display for ImportDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for comment in &self.leading_comments {
            writeln!(f, "// {comment}")?;
        }
        let mut parts = Vec::new();
        let mut named = Vec::new();
        for specifier in &self.specifiers {
            match specifier {
                ImportSpecifier::Default(local) => parts.push(local.to_string()),
                ImportSpecifier::Namespace(local) => parts.push(format!("* as {local}")),
                ImportSpecifier::Named {
                    imported,
                    local: Some(local)
                } => named.push(format!("{imported} as {local}")),
                ImportSpecifier::Named {
                    imported,
                    local: None
                } => named.push(imported.to_string())
            }
        }
        if !named.is_empty() {
            parts.push(format!("{{ {} }}", named.join(", ")));
        }
        write!(f, "import {} from \"{}\";", parts.join(", "), self.source)
    }
}

impl Display for ClassDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for decorator in &self.decorators {
            writeln!(f, "{decorator}")?;
        }
        if self.exported {
            f.write_str("export ")?;
        }
        write!(f, "class {}", self.id)?;
        if let Some(super_class) = &self.super_class {
            write!(f, " extends {super_class}")?;
        }
        f.write_str(" {\n")?;
        for member in &self.body {
            match member {
                ClassMember::Method(method) => write_method(f, method)?,
                ClassMember::Property(property) => write_property(f, property)?
            }
        }
        f.write_str("}")
    }
}

fn write_method(f: &mut Formatter<'_>, method: &ClassMethod) -> fmt::Result {
    for decorator in &method.decorators {
        writeln!(f, "{INDENT}{decorator}")?;
    }
    f.write_str(INDENT)?;
    if method.is_async {
        f.write_str("async ")?;
    }
    match method.kind {
        MethodKind::Constructor => f.write_str("constructor")?,
        MethodKind::Method => write!(f, "{}", method.key)?
    }
    write!(f, "({})", join(&method.params, ", "))?;
    if let Some(ty) = &method.return_type {
        write!(f, ": {ty}")?;
    }
    f.write_str(" {\n")?;
    for stmt in &method.body {
        writeln!(f, "{INDENT}{INDENT}{stmt}")?;
    }
    writeln!(f, "{INDENT}}}")
}

fn write_property(f: &mut Formatter<'_>, property: &ClassProperty) -> fmt::Result {
    for decorator in &property.decorators {
        writeln!(f, "{INDENT}{decorator}")?;
    }
    write!(f, "{INDENT}{}", property.key)?;
    if let Some(ty) = &property.type_annotation {
        write!(f, ": {ty}")?;
    }
    if let Some(value) = &property.value {
        write!(f, " = {value}")?;
    }
    f.write_str(";\n")
}

impl Display for Param {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for decorator in &self.decorators {
            write!(f, "{decorator} ")?;
        }
        if let Some(accessibility) = self.accessibility {
            write!(f, "{} ", accessibility.as_str())?;
        }
        write!(f, "{}", self.name)?;
        if let Some(ty) = &self.type_annotation {
            write!(f, ": {ty}")?;
        }
        Ok(())
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.arguments.is_empty() {
            write!(f, "<{}>", join(&self.arguments, ", "))?;
        }
        if self.array {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

impl Display for Decorator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.expression)
    }
}

impl Display for ObjectMember {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property {
                key,
                value
            } => write!(f, "{key}: {value}"),
            Self::Spread(expr) => write!(f, "...{expr}")
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(id) => write!(f, "{id}"),
            Self::Placeholder(key) => write!(f, "${{{key}}}"),
            Self::StringLiteral(value) => write!(f, "\"{}\"", value.replace('"', "\\\"")),
            Self::This => f.write_str("this"),
            Self::Super => f.write_str("super"),
            Self::Array(elements) => write!(f, "[{}]", join(elements, ", ")),
            Self::Object(members) if members.is_empty() => f.write_str("{}"),
            Self::Object(members) => write!(f, "{{ {} }}", join(members, ", ")),
            Self::Member {
                object,
                property
            } => write!(f, "{object}.{property}"),
            Self::Call {
                callee,
                arguments
            } => write!(f, "{callee}({})", join(arguments, ", ")),
            Self::Arrow {
                params,
                body,
                is_async
            } => {
                if *is_async {
                    f.write_str("async ")?;
                }
                write!(f, "({}) => ", join(params, ", "))?;
                match body.as_ref() {
                    Self::Object(_) => write!(f, "({body})"),
                    _ => write!(f, "{body}")
                }
            }
            Self::Await(expr) => write!(f, "await {expr}"),
            Self::Logical {
                operator,
                left,
                right
            } => write!(f, "{left} {} {right}", operator.as_str()),
            Self::Raw(source) => f.write_str(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ast::{
        Accessibility,
        build::{arrow, call, decorator_call, ident, import_names, member_path, ts_ignore}
    };

    #[test]
    fn separated_lists() {
        assert_eq!(Expression::Array(vec![]).to_string(), "[]");
        assert_eq!(
            Expression::Array(vec![ident("ACLModule"), ident("AuthModule"), ident("PrismaModule")])
                .to_string(),
            "[ACLModule, AuthModule, PrismaModule]"
        );
        assert_eq!(
            call(ident("forwardRef"), vec![arrow(&[], ident("AuthModule"))]).to_string(),
            "forwardRef(() => AuthModule)"
        );
        assert_eq!(
            call(Expression::Super, vec![ident("prisma"), ident("passwordService")]).to_string(),
            "super(prisma, passwordService)"
        );
    }

    #[test]
    fn renders_import_with_comment() {
        let import = ts_ignore(import_names(&["DefaultAuthGuard"], "../../auth/defaultAuth.guard"));
        assert_eq!(
            import.to_string(),
            "// @ts-ignore\nimport { DefaultAuthGuard } from \"../../auth/defaultAuth.guard\";"
        );
    }

    #[test]
    fn renders_class_with_constructor_and_method() {
        let mut method = ClassMethod::method("create");
        method.is_async = true;
        method.params.push(Param::new("args"));
        method.decorators.push(decorator_call("common", "Post", vec![]));
        method.body.push(Statement::Return(Some(call(
            member_path("this.service.create"),
            vec![ident("args")]
        ))));

        let class = ClassDeclaration {
            id:          Name::from("UserControllerBase"),
            super_class: None,
            decorators:  vec![],
            body:        vec![
                ClassMember::Method(ClassMethod::constructor(
                    vec![
                        Param::new("service")
                            .typed(TypeRef::named("UserService"))
                            .with_accessibility(Accessibility::Protected),
                    ],
                    vec![]
                )),
                ClassMember::Method(method),
            ],
            exported:    true
        };

        let expected = "export class UserControllerBase {\n  constructor(protected service: \
                        UserService) {\n  }\n  @common.Post()\n  async create(args) {\n    \
                        return this.service.create(args);\n  }\n}";
        assert_eq!(class.to_string(), expected);
    }

    #[test]
    fn renders_arrow_and_placeholder() {
        let expr = call(
            ident("transform"),
            vec![
                Expression::Placeholder("VALUE".to_string()),
                arrow(&["password"], call(member_path("this.hash"), vec![ident("password")])),
            ]
        );
        assert_eq!(
            expr.to_string(),
            "transform(${VALUE}, (password) => this.hash(password))"
        );
    }
}
