//! Static HTML rendering of the listing.
//!
//! The page is a single self-contained document: a header with the site
//! title, entry count and search box, an optional search-result banner,
//! one section per date, and an explicit "no results" block. Accent
//! colors are Tailwind gradient classes, so the page pulls the Tailwind
//! CDN runtime and sets `darkMode: 'class'`.

use anyhow::Result;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::path::Path;

use linkshelf_core::catalog::{Catalog, ListingStatus};
use linkshelf_core::models::{Entry, Group};

use crate::config::{Config, SiteConfig};
use crate::data;
use crate::theme::{PreferenceStore, Theme};

/// Number of placeholder cards shown while the catalog is loading.
const SKELETON_CARDS: usize = 10;

/// Render the page to `output`, or stdout when `None`.
pub fn run_render(config: &Config, output: Option<&Path>, query: Option<&str>) -> Result<()> {
    let catalog = data::load_catalog(config)?;
    let theme = PreferenceStore::new(&config.preferences.path).load();
    let page = render_page(&config.site, &catalog, query.unwrap_or(""), theme).into_string();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, &page)?;
            tracing::info!(path = %path.display(), theme = theme.as_str(), "rendered page");
            eprintln!("Rendered {} entries to {}", catalog.total_entries(), path.display());
        }
        None => println!("{}", page),
    }
    Ok(())
}

pub fn render_page(site: &SiteConfig, catalog: &Catalog, query: &str, theme: Theme) -> Markup {
    let query = query.trim();
    let view = catalog.search(query);
    let status = catalog.status_of(&view);

    html! {
        (DOCTYPE)
        html lang="zh-CN" class=[theme.is_dark().then_some("dark")] {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if status == ListingStatus::Loading {
                    meta http-equiv="refresh" content="1";
                }
                title { (site.title) }
                script src="https://cdn.tailwindcss.com" {}
                script { (PreEscaped("tailwind.config = { darkMode: 'class' };")) }
                style { (PreEscaped(CSS)) }
            }
            body class="min-h-screen bg-slate-50 dark:bg-slate-900 text-slate-900 dark:text-slate-100" {
                (render_header(site, catalog, query))
                main class="max-w-7xl mx-auto px-4 sm:px-6 py-6 sm:py-8" {
                    @if status == ListingStatus::Loading {
                        (render_skeleton())
                    } @else {
                        @if !query.is_empty() {
                            (render_search_banner(query, view.total_entries))
                        }
                        @if view.is_empty() {
                            (render_no_results())
                        } @else {
                            div class="space-y-12 sm:space-y-16" {
                                @for group in &view.groups {
                                    (render_group(group))
                                }
                            }
                        }
                    }
                }
                footer class="mt-16 py-8 text-center text-slate-500 dark:text-slate-400" {
                    h3 class="text-xl font-bold" { (site.title) }
                    p { (site.tagline) }
                }
            }
        }
    }
}

fn render_header(site: &SiteConfig, catalog: &Catalog, query: &str) -> Markup {
    html! {
        header class="sticky top-0 z-50 bg-white/70 dark:bg-slate-900/80 backdrop-blur-xl border-b border-slate-200/40 dark:border-slate-700/50" {
            div class="max-w-7xl mx-auto px-4 sm:px-6 py-4 flex flex-wrap justify-between items-center gap-4" {
                div class="flex items-center gap-2" {
                    h1 class="text-lg sm:text-2xl font-bold" { (site.title) }
                    @if !catalog.is_loading() {
                        span class="text-xs sm:text-sm text-slate-500 dark:text-slate-400" {
                            "已收录 " (catalog.total_entries()) " 个优质资源"
                        }
                    }
                }
                div class="flex items-center gap-2 sm:gap-4" {
                    form method="get" action="/" role="search" {
                        input type="search" name="q" value=(query)
                            placeholder="搜索资源或日期..."
                            class="pl-4 pr-4 py-2 w-64 rounded-xl border border-slate-200 dark:border-slate-700 bg-white/60 dark:bg-slate-800/70";
                    }
                    @if let Some(url) = &site.community_url {
                        a href=(url) target="_blank" rel="noopener noreferrer"
                            class="px-4 py-2 rounded-xl text-white bg-gradient-to-r from-blue-500 to-indigo-600" {
                            "资源社群"
                        }
                    }
                }
            }
        }
    }
}

fn render_search_banner(query: &str, entries: usize) -> Markup {
    html! {
        div class="search-banner mb-6 p-4 rounded-xl bg-blue-50/60 dark:bg-blue-900/20 text-blue-800 dark:text-blue-300" {
            p {
                "搜索 \"" strong { (query) } "\"，找到 " strong { (entries) } " 个相关资源"
            }
            a href="/" class="text-xs underline" { "清除搜索" }
        }
    }
}

fn render_group(group: &Group) -> Markup {
    html! {
        section class="day" data-date=(group.date_key()) {
            div class="mb-4 flex items-center justify-between" {
                div class="px-4 py-3 rounded-lg bg-slate-100 dark:bg-slate-700/60 flex items-center gap-3" {
                    h2 class="font-semibold" { (group.display_date) }
                    span class="text-slate-600 dark:text-slate-400" { (group.weekday_label) }
                }
                span class="count px-2 py-1 text-xs rounded-md bg-blue-50/80 dark:bg-blue-900/30" {
                    (group.entries.len())
                }
            }
            div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 2xl:grid-cols-5 gap-4 sm:gap-6" {
                @for entry in &group.entries {
                    (render_card(entry))
                }
            }
        }
    }
}

fn render_card(entry: &Entry) -> Markup {
    html! {
        a id=(entry.id) href=(entry.url) target="_blank" rel="noopener noreferrer"
            class="card block p-4 rounded-2xl bg-white/80 dark:bg-slate-800/70 shadow-sm hover:shadow-lg" {
            div class="flex items-center gap-3" {
                div class={"avatar w-10 h-10 rounded-xl flex items-center justify-center text-white font-bold bg-gradient-to-r " (entry.accent_color)} {
                    (entry.initial())
                }
                h3 class="font-semibold truncate" { (entry.name) }
            }
            @if !entry.description.is_empty() {
                p class="mt-2 text-sm text-slate-600 dark:text-slate-400" { (entry.description) }
            }
        }
    }
}

fn render_skeleton() -> Markup {
    html! {
        div class="loading grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 2xl:grid-cols-5 gap-4 sm:gap-6" {
            @for _ in 0..SKELETON_CARDS {
                div class="skeleton h-24 rounded-2xl" {}
            }
        }
    }
}

fn render_no_results() -> Markup {
    html! {
        div class="no-results text-center py-12 sm:py-16" {
            h3 class="text-lg sm:text-xl font-semibold mb-2" { "没有找到相关资源" }
            p class="text-slate-600 dark:text-slate-400" { "试试其他关键词或浏览推荐资源" }
        }
    }
}

const CSS: &str = r#"
.skeleton {
    background: linear-gradient(90deg, rgba(148,163,184,0.15) 25%, rgba(148,163,184,0.3) 50%, rgba(148,163,184,0.15) 75%);
    background-size: 200% 100%;
    animation: shimmer 1.5s infinite;
}

@keyframes shimmer {
    0% { background-position: 200% 0; }
    100% { background-position: -200% 0; }
}

.card { transition: box-shadow 0.2s, transform 0.2s; }
.card:hover { transform: translateY(-2px); }
"#;
