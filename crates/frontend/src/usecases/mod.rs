pub mod u101_register_account;
