use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Full-Stack Developer" />
        <div class="max-w-6xl mx-auto px-4 page-content">
            <section class="min-h-screen flex flex-col justify-center items-center text-center section-content">
                <p class="font-mono text-green mb-4">"roman@portfolio:~$ whoami"</p>
                <h1 class="text-4xl lg:text-6xl font-bold mb-6">"Roman Sorokin"</h1>
                <p class="text-xl lg:text-2xl text-muted mb-8">
                    "Full-Stack Developer focused on backend systems and data architecture"
                </p>
                <div class="flex flex-col sm:flex-row gap-4">
                    <a
                        href="#contact"
                        class="bg-blue/20 hover:bg-blue/30 text-blue px-6 py-3 rounded-md font-medium transition-all duration-200 border border-blue/30"
                    >
                        "Get in touch"
                    </a>
                </div>
            </section>
            <section id="about" class="flex flex-col gap-4 max-w-3xl mx-auto my-16 section-content">
                <h2 class="text-2xl font-bold">"About"</h2>
                <p class="text-base leading-relaxed">
                    "I build the parts of a product that nobody sees until they break: APIs, data pipelines, and the storage underneath them. "
                    "I care about tools that have a clear purpose and keep working long after launch."
                </p>
            </section>
            <section id="contact" class="flex justify-center items-center my-16 section-content">
                <div class="w-full max-w-2xl text-center glass-dark p-6 rounded-lg border border-white/10">
                    <h2 class="text-2xl font-bold mb-4">"Let's Connect"</h2>
                    <p class="mb-6">
                        "Open to collaboration, interesting problems and good conversations."
                    </p>
                    <div class="flex justify-center gap-6 text-lg">
                        <a
                            href="https://github.com/"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="GitHub Profile"
                        >
                            "GitHub"
                        </a>
                        <a
                            href="https://linkedin.com/"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="LinkedIn Profile"
                        >
                            "LinkedIn"
                        </a>
                    </div>
                </div>
            </section>
        </div>
    }
}
