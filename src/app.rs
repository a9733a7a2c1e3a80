mod background;
mod homepage;
mod not_found;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

pub use background::EffectBackground;
use homepage::HomePage;
use not_found::NotFound;

const DESCRIPTION: &str = "Personal portfolio of Roman Sorokin, a Full-Stack Developer passionate about backend systems, data architecture, and building purposeful tools.";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="description" content=DESCRIPTION />
                <meta
                    name="keywords"
                    content="Roman Sorokin, Full-Stack Developer, Backend Developer, Software Development, Portfolio"
                />
                <meta name="author" content="Roman Sorokin" />
                <meta name="robots" content="index, follow, max-image-preview:large" />
                <meta property="og:type" content="website" />
                <meta property="og:locale" content="en_US" />
                <meta property="og:url" content="https://roman-sorokin.vercel.app" />
                <meta property="og:title" content="Roman Sorokin - Full-Stack Developer" />
                <meta property="og:description" content=DESCRIPTION />
                <meta property="og:site_name" content="Roman Sorokin Portfolio" />
                <meta name="twitter:card" content="summary_large_image" />
                <meta name="twitter:title" content="Roman Sorokin - Full-Stack Developer" />
                <meta name="twitter:description" content=DESCRIPTION />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Roman Sorokin - {title}") />

        // one background for every route
        <EffectBackground />
        <Router>
            <main class="relative z-10 flex flex-col flex-grow justify-center items-center mx-auto w-full max-w-7xl">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
