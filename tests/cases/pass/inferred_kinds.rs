// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use auth_codegen::{
    Entity,
    model::{DataType, DescribeEntity}
};

#[derive(Entity)]
pub struct Product {
    pub r#type:    String,
    pub in_stock:  bool,
    pub quantity:  Option<u32>,
    pub price:     f64,
    pub reference: [u8; 16]
}

fn main() {
    let product = Product::describe();
    let kinds: Vec<_> = product
        .fields
        .iter()
        .map(|field| (field.name.as_str(), field.data_type.clone()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("type", DataType::SingleLineText),
            ("inStock", DataType::Boolean),
            ("quantity", DataType::WholeNumber),
            ("price", DataType::DecimalNumber),
            ("reference", DataType::Other),
        ]
    );
}
