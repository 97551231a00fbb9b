//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the application-lifetime objects: the session store, the
//! backend configuration, and the one-shot session resolver. Everything
//! below it reads them from context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::route_gate::RouteGate;
use crate::net::backend::BackendConfig;
use crate::pages::{
    add_post::AddPostPage, all_posts::AllPostsPage, edit_post::EditPostPage, home::HomePage,
    login::LoginPage, post::PostPage, signup::SignupPage,
};
use crate::state::gate::RouteRequirement;
use crate::state::resolver::SessionResolver;
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session store, bridges it into a reactive signal, kicks off
/// the startup session resolution, and declares the gated route tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new();
    let config = BackendConfig::from_build_env();
    let session = RwSignal::new(store.state());

    // Bridge: every committed store state flows into the signal, so gates
    // and the header re-evaluate by subscription rather than polling.
    let bridge = store.subscribe(move |state| session.set(state.clone()));
    on_cleanup(move || drop(bridge));

    provide_context(store.clone());
    provide_context(config.clone());
    provide_context(session);

    let resolver = SessionResolver::new(store);
    #[cfg(feature = "hydrate")]
    {
        // Application-lifetime startup task: resolve Unknown exactly once.
        if resolver.begin() {
            let resolver = resolver.clone();
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let outcome = match crate::net::identity::fetch_current_account(&config).await {
                    Ok(Some(profile)) => {
                        crate::state::resolver::ResolutionOutcome::Profile(profile)
                    }
                    Ok(None) => crate::state::resolver::ResolutionOutcome::NoSession,
                    Err(reason) => crate::state::resolver::ResolutionOutcome::Failed(reason),
                };
                resolver.complete(outcome);
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // The session cookie only exists in the browser; server renders stay
        // in the waiting state and hydration resolves them.
        let _ = &resolver;
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/inkpost.css"/>
        <Title text="Inkpost"/>

        <Router>
            <Header/>
            <main class="app__main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=StaticSegment("login")
                        view=|| {
                            view! {
                                <RouteGate requirement=RouteRequirement::Anonymous>
                                    <LoginPage/>
                                </RouteGate>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=|| {
                            view! {
                                <RouteGate requirement=RouteRequirement::Anonymous>
                                    <SignupPage/>
                                </RouteGate>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("all-posts")
                        view=|| {
                            view! {
                                <RouteGate requirement=RouteRequirement::Authenticated>
                                    <AllPostsPage/>
                                </RouteGate>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("add-post")
                        view=|| {
                            view! {
                                <RouteGate requirement=RouteRequirement::Authenticated>
                                    <AddPostPage/>
                                </RouteGate>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("edit-post"), ParamSegment("slug"))
                        view=|| {
                            view! {
                                <RouteGate requirement=RouteRequirement::Authenticated>
                                    <EditPostPage/>
                                </RouteGate>
                            }
                        }
                    />
                    <Route path=(StaticSegment("post"), ParamSegment("slug")) view=PostPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
