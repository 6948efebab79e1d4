//! Table definitions for the seeded schema.

/// Extension providing `uuid_generate_v4()` for generated primary keys.
pub const UUID_EXTENSION: &str = "uuid-ossp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    Customers,
    Invoices,
    Revenue,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::Users,
        Table::Customers,
        Table::Invoices,
        Table::Revenue,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Customers => "customers",
            Table::Invoices => "invoices",
            Table::Revenue => "revenue",
        }
    }

    /// Whether the table's default key comes from `uuid_generate_v4()`.
    pub fn uses_generated_uuid(&self) -> bool {
        !matches!(self, Table::Revenue)
    }

    /// Column names in declaration order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::Users => &["user_id", "name", "email", "password", "profile_pic"],
            Table::Customers => &["id", "name", "email", "image_url"],
            Table::Invoices => &["id", "customer_id", "amount", "status", "date"],
            Table::Revenue => &["month", "revenue"],
        }
    }

    /// Columns that carry a primary key or unique constraint.
    pub fn unique_columns(&self) -> &'static [&'static str] {
        match self {
            Table::Users => &["user_id", "email"],
            Table::Customers => &["id"],
            Table::Invoices => &["id"],
            Table::Revenue => &["month"],
        }
    }

    pub fn create_sql(&self) -> &'static str {
        match self {
            Table::Users => {
                r#"
                CREATE TABLE IF NOT EXISTS users (
                    user_id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                    name VARCHAR(255) NOT NULL,
                    email TEXT NOT NULL UNIQUE,
                    password TEXT NOT NULL,
                    profile_pic TEXT
                )
                "#
            }
            Table::Customers => {
                r#"
                CREATE TABLE IF NOT EXISTS customers (
                    id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                    name VARCHAR(255) NOT NULL,
                    email VARCHAR(255) NOT NULL,
                    image_url VARCHAR(255) NOT NULL
                )
                "#
            }
            Table::Invoices => {
                r#"
                CREATE TABLE IF NOT EXISTS invoices (
                    id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                    customer_id UUID NOT NULL,
                    amount INT NOT NULL,
                    status VARCHAR(255) NOT NULL,
                    date DATE NOT NULL
                )
                "#
            }
            Table::Revenue => {
                r#"
                CREATE TABLE IF NOT EXISTS revenue (
                    month VARCHAR(4) NOT NULL UNIQUE,
                    revenue INT NOT NULL
                )
                "#
            }
        }
    }
}
