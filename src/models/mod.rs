pub mod customer_input;
