use leptos::prelude::*;

#[component]
pub fn ListingHead(
    title: String,
    image_src: String,
    location_value: String,
    id: String,
) -> impl IntoView {
    let alt = title.clone();

    view! {
        <div class="listing-head" data-listing-id=id>
            <h1 class="listing-head__title">{title}</h1>
            <p class="listing-head__location">{location_value}</p>
            <div class="listing-head__image-frame">
                <img class="listing-head__image" src=image_src alt=alt />
            </div>
        </div>
    }
}
