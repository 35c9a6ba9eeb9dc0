use crate::layout::global_context::use_site_config;
use crate::shared::components::anchor_link::AnchorLink;
use contracts::usecases::u503_render_product::product_href;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_site_config();
    let brand = config.site.brand.clone();

    let collection = config
        .products
        .iter()
        .map(|(key, product)| {
            let href = product_href(key);
            view! {
                <a class="collection__item" href=href>
                    <img class="collection__image" src={product.image.clone()} alt={product.image_alt().to_string()} />
                    <span class="collection__title">{product.title.clone()}</span>
                    <span class="collection__price">{product.price.clone()}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <section class="hero">
            <h1 class="hero__title">{brand.clone()}</h1>
            <p class="hero__subtitle">"Bespoke tailoring since the first stitch"</p>
            <AnchorLink href="#collections" class="button button--primary">
                "Explore Collections"
            </AnchorLink>
        </section>

        <section id="collections" class="section">
            <h2 class="section__title">"Collections"</h2>
            <div class="collection">{collection}</div>
        </section>

        <section id="about" class="section">
            <h2 class="section__title">"About"</h2>
            <p>
                {format!(
                    "{} cuts every garment to measure, from Super 150s suits to hand-finished accessories.",
                    brand,
                )}
            </p>
        </section>
    }
}
