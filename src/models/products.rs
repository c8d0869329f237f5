use diesel::prelude::*;

use crate::schema::products;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub unit: String,
    pub category: String,
    pub brand: String,
    pub stock: i32,
    pub status: String,
    pub image: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = products)]
pub struct NewProduct {
    pub name: String,
    pub unit: String,
    pub category: String,
    pub brand: String,
    pub stock: i32,
    pub status: String,
    pub image: String,
}

/// 整行替换，所有字段一并更新
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = products)]
pub struct ProductChangeset {
    pub name: String,
    pub unit: String,
    pub category: String,
    pub brand: String,
    pub stock: i32,
    pub status: String,
    pub image: String,
}
