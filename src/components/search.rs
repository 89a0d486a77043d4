use leptos::*;

/// A plain search input without any wired-up behavior.
///
/// The placeholder is forwarded verbatim to the input element,
/// including the empty string.
#[component]
pub fn SearchField(#[prop(into)] placeholder: String) -> impl IntoView {
    view! {
      <div class="search-box">
        <input
          type="text"
          class="search-input"
          placeholder=placeholder
        />
      </div>
    }
}
