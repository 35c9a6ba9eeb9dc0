pub mod u501_submit_form;
pub mod u502_add_to_cart;
pub mod u503_render_product;
pub mod u504_anchor_scroll;
