use leptos::*;

use crate::components::*;

pub const SEARCH_PLACEHOLDER: &str = "Search stars or constellations...";

#[component]
pub fn Home() -> impl IntoView {
    view! {
      <div class="star-background">
        <NavBar />
        <div class="center-container">
          <SearchField placeholder=SEARCH_PLACEHOLDER />
        </div>
      </div>
    }
}
