use fuzzy_time::{TickUnit, TimeOfDay};

fn main() -> Result<(), fuzzy_time::Error> {
    // `phrases` prints a whole day, `phrases 16:37` a single time.
    if let Some(arg) = std::env::args().nth(1) {
        let (hour, minute) = arg.split_once(':').unwrap_or((arg.as_str(), "0"));
        let time = TimeOfDay::new(hour.parse().unwrap_or(0), minute.parse().unwrap_or(0))?;
        let fuzzy = fuzzy_time::FuzzyTime::from(time);
        println!(
            "{:02}:{:02}  {}  ({:+})",
            time.hour(),
            time.minute(),
            fuzzy,
            fuzzy.delta.value()
        );
        return Ok(());
    }

    let now = chrono::Local::now();
    let current = TimeOfDay::from_clock(&now, TickUnit::Minute);

    for hour in 0..24 {
        for minute in 0..60 {
            let time = TimeOfDay::new(hour, minute)?;
            let fuzzy = fuzzy_time::format(hour, minute);
            let marker = if time == current { '>' } else { ' ' };
            println!(
                "{} {:02}:{:02}  {:<24} {:+}",
                marker,
                hour,
                minute,
                fuzzy.to_string(),
                fuzzy.delta.value()
            );
        }
    }

    Ok(())
}
