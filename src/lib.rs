use leptos::*;

pub mod pages;
use pages::*;

pub mod components;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    view! {
      <main>
        <Home />
      </main>
    }
}
