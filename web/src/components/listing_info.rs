use leptos::prelude::*;
use shared_types::SafeUser;

use crate::booking::Category;

#[component]
pub fn ListingInfo(
    user: SafeUser,
    category: Option<&'static Category>,
    description: String,
    room_count: i32,
    guest_count: i32,
    bathroom_count: i32,
    location_value: String,
) -> impl IntoView {
    let host_name = user.name.unwrap_or_else(|| "your host".to_string());
    let avatar = user
        .image
        .unwrap_or_else(|| "/images/placeholder.jpg".to_string());

    view! {
        <div class="listing-info">
            <div class="listing-info__host">
                <img class="listing-info__avatar" src=avatar alt="" />
                <div class="listing-info__host-name">{format!("Hosted by {}", host_name)}</div>
            </div>
            <div class="listing-info__counts">
                <span>{format!("{} guests", guest_count)}</span>
                <span>{format!("{} rooms", room_count)}</span>
                <span>{format!("{} bathrooms", bathroom_count)}</span>
            </div>
            <hr />

            {category.map(|category| view! {
                <div class="listing-info__category">
                    <span class="listing-info__category-icon">{category.icon}</span>
                    <div>
                        <div class="listing-info__category-label">{category.label}</div>
                        <div class="listing-info__category-description">{category.description}</div>
                    </div>
                </div>
                <hr />
            })}

            <p class="listing-info__description">{description}</p>
            <hr />
            <div class="listing-info__location">{format!("Located in {}", location_value)}</div>
        </div>
    }
}
