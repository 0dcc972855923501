//! Reflow a small article page in which the "related articles" widget has
//! been hidden, and print the layout before and after.

use reflow::{Options, Widget, reflow};

fn print_layout(title: &str, widgets: &[Widget]) {
    println!("{title}");
    for w in widgets {
        println!(
            "  {:<10} x={:<6} y={:<6} w={:<6} h={:<6}{}",
            w.id,
            w.x,
            w.y,
            w.width,
            w.height,
            if w.hidden { " (hidden)" } else { "" }
        );
    }
}

fn main() -> reflow::Result<()> {
    let widgets = vec![
        Widget::new("header", 0.0, 0.0, 300.0, 37.5),
        Widget::new("sidebar", 0.0, 40.0, 62.5, 200.0),
        Widget::new("main", 65.0, 40.0, 200.0, 100.0),
        Widget::new("related", 65.0, 150.0, 200.0, 40.0).hide(),
        Widget::new("comments", 65.0, 200.0, 200.0, 75.0),
        Widget::new("footer", 0.0, 240.0, 300.0, 37.5),
        Widget::new("fb", 270.0, 45.0, 25.0, 25.0),
        Widget::new("ig", 270.0, 75.0, 25.0, 25.0),
    ];

    print_layout("before:", &widgets);
    let out = reflow(&widgets, Options::default())?;
    print_layout("after:", &out);
    Ok(())
}
