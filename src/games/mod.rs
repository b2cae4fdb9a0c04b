pub mod tennis;
