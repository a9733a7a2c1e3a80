use chrono::DateTime;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

const BUILD_TIME: &str = env!("BUILD_TIME");

const CAT: &str = r#"    /\_/\
   ( o.o )
    > ^ <"#;

/// `ls`-style timestamp of when the site was built.
fn listing_date(build_time: &str) -> String {
    DateTime::parse_from_rfc3339(build_time)
        .map(|date| date.format("%b %e %Y").to_string())
        .unwrap_or_else(|_| "Jan  1 1970".to_string())
}

#[component]
pub fn NotFound() -> impl IntoView {
    let date = listing_date(BUILD_TIME);
    let entry = move |perms: &str, size: u32, name: &str| {
        format!("{perms} 2 roman roman {size:>2} {date} {name}")
    };

    view! {
        <Title text="Page Not Found" />
        <div class="min-h-screen flex items-center justify-center px-4 font-mono text-green">
            <div class="max-w-2xl mx-auto text-center">
                <div class="mb-8 section-content">
                    <div class="text-2xl mb-4">"roman@portfolio:~$"</div>
                    <div class="glass-dark rounded-lg p-6 text-left border border-white/10">
                        <p class="mb-2">"$ cd /page-you-requested"</p>
                        <p class="text-red mb-2">
                            "bash: cd: /page-you-requested: No such file or directory"
                        </p>
                        <p class="mb-2">"$ ls -la"</p>
                        <p class="mb-2">"total 0"</p>
                        <p class="mb-2">{entry("drwxr-xr-x", 60, ".")}</p>
                        <p class="mb-2">{entry("drwxr-xr-x", 80, "..")}</p>
                        <p class="mb-4">{entry("-rw-r--r--", 0, "404.txt")}</p>
                        <p class="mb-2">"$ cat 404.txt"</p>
                        <p class="text-white">"Oops! You wandered off the map."</p>
                        <p class="text-white">"This page doesn't exist in my portfolio universe."</p>
                        <p class="mt-4">"$ _"</p>
                    </div>
                </div>
                <div class="mb-8 section-content">
                    <pre class="text-4xl mb-4">{CAT}</pre>
                    <p class="text-lg text-muted">"Even this pixelated cat is confused!"</p>
                </div>
                <A
                    href="/"
                    attr:class="inline-block bg-green/80 hover:bg-green text-white px-6 py-3 rounded-md font-medium transition-all duration-200"
                >
                    "Return Home"
                </A>
                <p class="mt-8 text-sm text-muted">
                    "Tip: Use the navigation menu to explore my portfolio properly!"
                </p>
            </div>
        </div>
    }
}
