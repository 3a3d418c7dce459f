mod customer;
mod customer_input;

pub use customer::Customer;
pub use customer_input::{CustomerPatch, NewCustomer};
