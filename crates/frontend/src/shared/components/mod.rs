pub mod anchor_link;
pub mod ui;
