//! uplift demo - Initialize a page and walk through the widget lifecycle

use anyhow::{Context, Result};
use uplift::{init_all, InitOptions, NotificationBanner, Overrides, Page, Registry};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uplift=debug".into()),
        )
        .init();

    let dom = uplift::markup::parse(
        r##"<body class="uplift-supported">
             <a href="#content" data-module="uplift-skip-link">Skip to content</a>
             <div role="alert" data-module="uplift-notification-banner">Saved.</div>
             <a href="#nowhere" data-module="uplift-skip-link">Broken link</a>
             <main id="content">Main content</main>
           </body>"##,
    );

    let mut page = Page::new(dom);
    let options = InitOptions::new().configure(
        NotificationBanner::MODULE,
        Overrides::new().bool("disable-auto-focus", false),
    );
    let count = init_all(&mut page, &Registry::standard(), options)?;
    println!("initialised {count} widget(s); the broken skip link was isolated");

    let banner = page
        .document()
        .active_element()
        .context("alert banner takes focus on init")?;
    println!(
        "banner focused with tabindex={:?}",
        page.document().attr(banner, "tabindex")
    );

    page.blur(banner);
    println!(
        "after blur, tabindex={:?}",
        page.document().attr(banner, "tabindex")
    );

    Ok(())
}
