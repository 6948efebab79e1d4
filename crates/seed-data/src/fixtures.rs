//! Placeholder data the dashboard is seeded with.
//!
//! Invoice ids are fixed so that re-seeding skips rows instead of
//! duplicating them.

use time::macros::date;
use uuid::{Uuid, uuid};

use crate::models::{Customer, Invoice, Revenue, User};

/// A borrowed set of rows for each seeded table.
#[derive(Debug, Clone, Copy)]
pub struct Fixtures<'a> {
    pub users: &'a [User],
    pub customers: &'a [Customer],
    pub invoices: &'a [Invoice],
    pub revenue: &'a [Revenue],
}

impl Fixtures<'static> {
    /// The stock data set used by `GET /seed` and the `seed` binary.
    pub fn placeholder() -> Self {
        Self {
            users: &USERS,
            customers: &CUSTOMERS,
            invoices: &INVOICES,
            revenue: &REVENUE,
        }
    }
}

const EVIL_RABBIT: Uuid = uuid!("d6e15727-9fe1-4961-8c5b-ea44a9bd81aa");
const DELBA_DE_OLIVEIRA: Uuid = uuid!("3958dc9e-712f-4377-85e9-fec4b6a6442a");
const LEE_ROBINSON: Uuid = uuid!("3958dc9e-742f-4377-85e9-fec4b6a6442a");
const MICHAEL_NOVOTNY: Uuid = uuid!("76d65c26-f784-44a2-ac19-586678f7c2f2");
const AMY_BURNS: Uuid = uuid!("cc27c14a-0acf-4f4a-a6c9-d45682c144b9");
const BALAZS_ORBAN: Uuid = uuid!("13d07535-c59e-4157-a011-f8d2ef4e0cbb");

pub static USERS: [User; 1] = [User {
    id: uuid!("410544b2-4001-4271-9855-fec4b6a6442a"),
    name: "User",
    email: "user@nextmail.com",
    password: "123456",
    profile_pic: None,
}];

pub static CUSTOMERS: [Customer; 6] = [
    Customer {
        id: EVIL_RABBIT,
        name: "Evil Rabbit",
        email: "evil@rabbit.com",
        image_url: "/customers/evil-rabbit.png",
    },
    Customer {
        id: DELBA_DE_OLIVEIRA,
        name: "Delba de Oliveira",
        email: "delba@oliveira.com",
        image_url: "/customers/delba-de-oliveira.png",
    },
    Customer {
        id: LEE_ROBINSON,
        name: "Lee Robinson",
        email: "lee@robinson.com",
        image_url: "/customers/lee-robinson.png",
    },
    Customer {
        id: MICHAEL_NOVOTNY,
        name: "Michael Novotny",
        email: "michael@novotny.com",
        image_url: "/customers/michael-novotny.png",
    },
    Customer {
        id: AMY_BURNS,
        name: "Amy Burns",
        email: "amy@burns.com",
        image_url: "/customers/amy-burns.png",
    },
    Customer {
        id: BALAZS_ORBAN,
        name: "Balazs Orban",
        email: "balazs@orban.com",
        image_url: "/customers/balazs-orban.png",
    },
];

pub static INVOICES: [Invoice; 13] = [
    Invoice {
        id: uuid!("5e3b9a0c-1f0a-4b8e-9c61-0d7a1c2e0001"),
        customer_id: EVIL_RABBIT,
        amount: 15795,
        status: "pending",
        date: date!(2022-12-06),
    },
    Invoice {
        id: uuid!("5e3b9a0c-1f0a-4b8e-9c61-0d7a1c2e0002"),
        customer_id: DELBA_DE_OLIVEIRA,
        amount: 20348,
        status: "pending",
        date: date!(2022-11-14),
    },
    Invoice {
        id: uuid!("5e3b9a0c-1f0a-4b8e-9c61-0d7a1c2e0003"),
        customer_id: AMY_BURNS,
        amount: 3040,
        status: "paid",
        date: date!(2022-10-29),
    },
    Invoice {
        id: uuid!("5e3b9a0c-1f0a-4b8e-9c61-0d7a1c2e0004"),
        customer_id: MICHAEL_NOVOTNY,
        amount: 44800,
        status: "paid",
        date: date!(2023-09-10),
    },
    Invoice {
        id: uuid!("5e3b9a0c-1f0a-4b8e-9c61-0d7a1c2e0005"),
        customer_id: BALAZS_ORBAN,
        amount: 34577,
        status: "pending",
        date: date!(2023-08-05),
    },
    Invoice {
        id: uuid!("5e3b9a0c-1f0a-4b8e-9c61-0d7a1c2e0006"),
        customer_id: LEE_ROBINSON,
        amount: 54246,
        status: "pending",
        date: date!(2023-07-16),
    },
    Invoice {
        id: uuid!("5e3b9a0c-1f0a-4b8e-9c61-0d7a1c2e0007"),
        customer_id: EVIL_RABBIT,
        amount: 666,
        status: "pending",
        date: date!(2023-06-27),
    },
    Invoice {
        id: uuid!("5e3b9a0c-1f0a-4b8e-9c61-0d7a1c2e0008"),
        customer_id: MICHAEL_NOVOTNY,
        amount: 32545,
        status: "paid",
        date: date!(2023-06-09),
    },
    Invoice {
        id: uuid!("5e3b9a0c-1f0a-4b8e-9c61-0d7a1c2e0009"),
        customer_id: AMY_BURNS,
        amount: 1250,
        status: "paid",
        date: date!(2023-06-17),
    },
    Invoice {
        id: uuid!("5e3b9a0c-1f0a-4b8e-9c61-0d7a1c2e000a"),
        customer_id: BALAZS_ORBAN,
        amount: 8546,
        status: "paid",
        date: date!(2023-06-07),
    },
    Invoice {
        id: uuid!("5e3b9a0c-1f0a-4b8e-9c61-0d7a1c2e000b"),
        customer_id: DELBA_DE_OLIVEIRA,
        amount: 500,
        status: "paid",
        date: date!(2023-08-19),
    },
    Invoice {
        id: uuid!("5e3b9a0c-1f0a-4b8e-9c61-0d7a1c2e000c"),
        customer_id: BALAZS_ORBAN,
        amount: 8945,
        status: "paid",
        date: date!(2023-06-03),
    },
    Invoice {
        id: uuid!("5e3b9a0c-1f0a-4b8e-9c61-0d7a1c2e000d"),
        customer_id: LEE_ROBINSON,
        amount: 1000,
        status: "paid",
        date: date!(2022-06-05),
    },
];

pub static REVENUE: [Revenue; 12] = [
    Revenue { month: "Jan", revenue: 2000 },
    Revenue { month: "Feb", revenue: 1800 },
    Revenue { month: "Mar", revenue: 2200 },
    Revenue { month: "Apr", revenue: 2500 },
    Revenue { month: "May", revenue: 2300 },
    Revenue { month: "Jun", revenue: 3200 },
    Revenue { month: "Jul", revenue: 3500 },
    Revenue { month: "Aug", revenue: 3700 },
    Revenue { month: "Sep", revenue: 2500 },
    Revenue { month: "Oct", revenue: 2800 },
    Revenue { month: "Nov", revenue: 3000 },
    Revenue { month: "Dec", revenue: 4800 },
];
