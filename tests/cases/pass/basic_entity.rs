// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use auth_codegen::{
    Entity,
    model::{DataType, DescribeEntity}
};

#[derive(Entity)]
pub struct User {
    #[id]
    pub id:       String,
    pub email:    String,
    #[password]
    pub password: String
}

fn main() {
    let user = User::describe();
    assert_eq!(user.name, "User");
    assert_eq!(user.plural(), "Users");
    assert_eq!(user.fields.len(), 3);
    assert_eq!(user.fields[0].data_type, DataType::Id);
    assert_eq!(user.password_fields().len(), 1);
}
