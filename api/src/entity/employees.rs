//! `employees` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// `name` folded with the service's case mapping, used for lookups
    pub name_folded: String,
    pub age: i32,
    pub date_of_joining: DateTime,
    #[sea_orm(column_type = "Decimal(None)")]
    pub salary: Decimal,
    pub position: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
