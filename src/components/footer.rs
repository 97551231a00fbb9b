//! Static site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__copy">"Inkpost — write, publish, repeat."</p>
        </footer>
    }
}
