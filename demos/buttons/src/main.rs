use std::cell::Cell;
use std::rc::Rc;

use marigold::{
    Anchor, Button, Color, Event, MouseEvent, Point, Primitive, RecordingSurface, Rect, Settings,
    Slider, Surface, Value, Widget,
};

/// Print what was drawn this frame, then start over.
fn present(frame: usize, surface: &mut RecordingSurface) {
    println!("frame {}:", frame);
    for primitive in surface.primitives.iter() {
        match primitive {
            Primitive::FillRect { rect, color } => {
                println!("  rect {}x{} at {} {:?}", rect.width(), rect.height(), rect.pos(), color)
            }
            Primitive::Circle { center, radius, .. } => {
                println!("  circle r={} at {}", radius, center)
            }
            Primitive::SingleLineText(text) => println!("  text {:?} at {}", text.text, text.position),
            other => println!("  {:?}", other),
        }
    }
    surface.clear();
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::default();

    // The slider moves the red button's top-right corner down the right edge.
    let red_top = Rc::new(Cell::new(160));
    let top = Rc::clone(&red_top);
    let mut slider = Slider::new(
        &settings,
        move |value| top.set(value as i32),
        (150, 100),
        (200, 30),
        0.0,
        160.0,
        1.0,
    );

    let red_clicked = Rc::new(Cell::new(false));
    let clicked = Rc::clone(&red_clicked);
    let top = Rc::clone(&red_top);
    let mut red = Button::new(
        &settings,
        move || clicked.set(true),
        Value::computed(move || Point::new(300, top.get())),
        (60, 40),
        "RED",
    )
    .with_anchor(Anchor::top_right());

    let script = [
        MouseEvent::left_pressed((100, 100)),
        MouseEvent::dragged((90, 140)),
        MouseEvent::left_released((90, 140)),
        MouseEvent::left_pressed((270, 50)),
        MouseEvent::left_released((270, 50)),
    ];

    let mut surface = RecordingSurface::new();
    for (frame, mouse) in script.iter().enumerate() {
        let event = Event::Mouse(*mouse);
        slider.on_event(&event)?;
        red.on_event(&event)?;

        if red_clicked.replace(false) {
            log::info!("red button clicked");
            slider.set_color(Color::RED);
        }

        surface.draw(Primitive::FillRect {
            rect: Rect::new(Point::ORIGIN, (300, 200).into()),
            color: Color::WHITE,
        });
        slider.render(&mut surface)?;
        red.render(&mut surface)?;

        log::debug!("slider at {}, red button is {}", slider.value(), red.anchored_box());
        present(frame, &mut surface);
    }

    Ok(())
}
