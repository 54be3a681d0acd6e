pub mod aggregate;
pub mod blog;
pub mod contact;
pub mod contact_form;
pub mod filter;
pub mod search;
pub mod skills;
pub mod sort;
pub mod timeline;
