//! uplift skip-link demo - click, focus, blur

use anyhow::{Context, Result};
use uplift::{init_all, InitOptions, Page, Registry};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let dom = uplift::markup::parse(
        r##"<body class="uplift-supported">
             <a href="#content" data-module="uplift-skip-link">Skip to content</a>
             <nav>Dozens of links worth skipping</nav>
             <main id="content">Main content</main>
           </body>"##,
    );

    let mut page = Page::new(dom);
    init_all(&mut page, &Registry::standard(), InitOptions::new())?;

    let link = page.components()[0].root();
    let target = page
        .document()
        .get_element_by_id("content")
        .context("demo markup has the target")?;

    page.click(link);
    println!(
        "clicked: target focused={}, tabindex={:?}, class={:?}",
        page.document().active_element() == Some(target),
        page.document().attr(target, "tabindex"),
        page.document().attr(target, "class"),
    );

    page.blur(target);
    println!(
        "blurred: tabindex={:?}, class={:?}",
        page.document().attr(target, "tabindex"),
        page.document().attr(target, "class"),
    );

    Ok(())
}
