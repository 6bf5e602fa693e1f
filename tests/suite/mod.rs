#[cfg(unix)]
mod scenarios;
