// Domain layer: entities and ports (capability traits). Behavior that
// coordinates several of them lives in `core`.

pub mod account;
pub mod model;
pub mod ports;
pub mod shop;

pub use account::Account;
pub use model::{AuditEntry, Employee, InformeData};
pub use shop::{
    Cart, CartItem, Order, OrderStatus, Payment, PaymentMethod, PaymentStatus, Product,
};
