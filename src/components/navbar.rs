use leptos::*;

pub const BRAND: &str = "Blue shift";

pub const NAV_LABELS: [&str; 3] = ["galaxy", "Solar system", "earth"];

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
      <nav class="navbar">

        // Brand
        <span class="nav-item left">{ BRAND }</span>

        // Menu items
        <div class="nav-right">
          { NAV_LABELS.into_iter().map(|label| view! { <NavItem label /> }).collect_view() }
        </div>
      </nav>
    }
}

#[component]
fn NavItem(label: &'static str) -> impl IntoView {
    view! {
      <span class="nav-item">{ label }</span>
    }
}
