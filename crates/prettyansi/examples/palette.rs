use std::io::{stdout, Result, Write};

use prettyansi::error::report;
use prettyansi::{set_state, Background, Color, ColorStream, Foreground, State, Style};

fn run() -> Result<()> {
    // Respect NO_COLOR and friends.
    set_state(State::from_environment());

    let mut stream = ColorStream::new(stdout().lock());
    stream.text("\n");

    for style in Style::ALL {
        stream
            .text("    ")
            .put(*style)
            .text(format!("{:<12}", style.name()))
            .put(Style::Normal)
            .text("\n");
    }
    stream.text("\n");

    for foreground in Foreground::ALL {
        stream.text("    ");
        for background in Background::ALL {
            stream
                .put(*foreground)
                .put(*background)
                .text(format!(" {:^7} ", foreground.name()))
                .put(Style::Normal);
        }
        stream.text("\n");
    }

    let alert = Color::new(Style::Bold, Foreground::Red);
    stream
        .text("\n    ")
        .put(alert)
        .text("Wow!")
        .put(Style::Normal)
        .text("\n\n");

    let mut out = stream.finish()?;
    out.flush()
}

fn main() {
    if let Err(error) = run() {
        report(&error);
        std::process::exit(1);
    }
}
