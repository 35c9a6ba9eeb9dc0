use super::view_model::ProductDetailsViewModel;
use crate::domain::a002_size_option::ui::SizeSelector;
use crate::layout::global_context::use_site_config;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn ProductDetails() -> impl IntoView {
    let config = use_site_config();
    let vm = ProductDetailsViewModel::new(&config);
    let location = use_location();

    {
        let config = config.clone();
        Effect::new(move |_| {
            let search = location.search.get();
            vm.load_from_query(&config, &search);
        });
    }

    let on_add_to_cart = move |_: leptos::ev::MouseEvent| vm.add_to_cart_command(&config);

    view! {
        <section class="product">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div id="productImage" class="product__image">
                {move || {
                    vm.product
                        .get()
                        .map(|p| view! { <img src={p.image.clone()} alt={p.image_alt().to_string()} /> })
                }}
            </div>

            <div class="product__info">
                <p id="productCategory" class="product__category">{vm.text(|p| p.category.as_str())}</p>
                <h1 id="productTitle" class="product__title">{vm.text(|p| p.title.as_str())}</h1>
                <p id="productPrice" class="product__price">{vm.text(|p| p.price.as_str())}</p>
                <p id="productDescription" class="product__description">{vm.text(|p| p.description.as_str())}</p>

                <SizeSelector sizes={vm.sizes} />

                <button id="addToCartBtn" type="button" class="button button--primary" on:click=on_add_to_cart>
                    "Add to Cart"
                </button>
            </div>
        </section>
    }
}
