/// Similar to `info!` macro in tracing, prefixed with a local timestamp.
/// Passing a starting time as the first argument also prints the elapsed
/// time since then.
/// ```
/// # use playscrape::info_time;
/// info_time!("str {}, {}", 1, 2);
/// let time = chrono::Local::now();
/// info_time!(time, "str {}, {}", 1, 2);
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        println!("{:<30} : {}", ::chrono::Local::now(), format!($strfm, $($arg),*));
    }};
    ($time:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        let local_now = ::chrono::Local::now();
        let run_time = (local_now - $time).num_milliseconds() as f64 / 1_000.0;
        println!(
            "{:<30} : {} ({run_time:.3} sec)",
            local_now,
            format!($strfm, $($arg),*)
        );
    }};
}
