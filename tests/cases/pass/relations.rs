// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use auth_codegen::{
    Entity,
    model::{DescribeEntity, Model, ModelView}
};

pub struct Order;

#[derive(Entity)]
#[entity(name = "Customer", plural = "Customers")]
pub struct CustomerRecord {
    #[id]
    pub id:          String,
    #[has_many(Order)]
    pub orders:      Vec<Order>,
    #[belongs_to(Customer)]
    pub referred_by: Option<Box<CustomerRecord>>
}

fn main() {
    let customer = CustomerRecord::describe();
    assert_eq!(customer.name, "Customer");
    assert_eq!(customer.to_many_fields().count(), 1);
    assert_eq!(customer.fields[2].name, "referredBy");
    assert_eq!(customer.fields[2].related_entity(), Some("Customer"));
    assert!(customer.fields[2].is_to_one());

    let model = Model::new().with_described::<CustomerRecord>();
    assert!(model.find_entity("customer").is_some());
}
