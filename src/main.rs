use std::io::{self, BufRead};
use std::str::FromStr;

use tickerdesk::analyzer::StockAnalyzer;
use tickerdesk::config::{AppConfig, load_config};
use tickerdesk::loader::load_table;
use tickerdesk::model::{LoadError, Table};
use tracing::{error, info, warn};

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from file; a missing config.json falls back
    // to the built-in file names.
    let config: AppConfig = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config load error: {}; using default file names", e);
            AppConfig::default()
        }
    };

    info!("Loading dividend data from {}...", config.dividends_file);
    let dividends = match load_table(&config.dividends_file) {
        Ok(table) => table,
        Err(e) => {
            report_unreadable(&config.dividends_file, e);
            return;
        }
    };

    info!("Loading price data from {}...", config.prices_file);
    let prices = match load_table(&config.prices_file) {
        Ok(table) => table,
        Err(e) => {
            report_unreadable(&config.prices_file, e);
            return;
        }
    };

    info!(
        "Loaded {} price rows and {} dividend rows",
        prices.rows.len(),
        dividends.rows.len()
    );

    let analyzer = StockAnalyzer::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!(
            "Choose one of the following options\n\
             1 - Simple Moving Average\n\
             2 - Exponential Moving Average\n\
             3 - Average Dividends\n\
             4 - Frequency Of Dividends Distribution\n\
             5 - Exit"
        );
        let Some(choice) = read_number::<u32>(&mut lines) else {
            return;
        };

        match choice {
            1 => {
                if !sma_menu(&analyzer, &prices, &mut lines) {
                    return;
                }
            }
            2 => ema_menu(&analyzer, &prices, &mut lines),
            3 => dividends_menu(&analyzer, &dividends, &mut lines),
            4 => match analyzer.dividend_distribution_frequency(&dividends) {
                Ok(months) => println!(
                    "The frequency of dividends distribution is every {} months\n",
                    months
                ),
                Err(e) => error!("Dividend frequency failed: {}", e),
            },
            5 => {
                println!("Thank you for using the app :)");
                return;
            }
            _ => println!("Please enter a number from the list.\n"),
        }
    }
}

/// SMA sub-menu. Returns false when the user picked the exit option.
fn sma_menu(analyzer: &StockAnalyzer, prices: &Table, lines: &mut Lines<'_>) -> bool {
    println!(
        "Choose one of the following options\n\
         1 - SMA for the whole file\n\
         2 - SMA for a specific period\n\
         3 - SMA for a specific year\n\
         4 - Exit"
    );
    let Some(choice) = read_number::<u32>(lines) else {
        return false;
    };

    match choice {
        1 => match analyzer.sma(prices) {
            Ok(value) => {
                println!("SMA of the closing price for the entire period = {}\n", value)
            }
            Err(e) => error!("SMA failed: {}", e),
        },
        2 => {
            println!("Enter the first year:");
            let Some(first) = read_number::<i32>(lines) else {
                return false;
            };
            println!("Enter the second year:");
            let Some(second) = read_number::<i32>(lines) else {
                return false;
            };
            match analyzer.sma_of_period(prices, first, second) {
                Ok(value) => println!("SMA for the specified period = {}\n", value),
                Err(e) => error!("SMA for period failed: {}", e),
            }
        }
        3 => {
            println!("Enter the year:");
            let Some(year) = read_line(lines) else {
                return false;
            };
            match analyzer.sma_year(prices, year.trim()) {
                Ok(value) => println!("SMA for the year {} = {}\n", year.trim(), value),
                Err(e) => error!("SMA for year failed: {}", e),
            }
        }
        4 => return false,
        _ => println!("Please enter a number from the list.\n"),
    }

    true
}

fn ema_menu(analyzer: &StockAnalyzer, prices: &Table, lines: &mut Lines<'_>) {
    println!("Enter the year:");
    let Some(year) = read_number::<i32>(lines) else {
        return;
    };
    println!("Enter the month:");
    let Some(month) = read_number::<u32>(lines) else {
        return;
    };
    println!("Enter the day:");
    let Some(day) = read_number::<u32>(lines) else {
        return;
    };
    println!("Enter the number of days to calculate the EMA:");
    let Some(days) = read_number::<usize>(lines) else {
        return;
    };

    match analyzer.exponential_moving_average(prices, year, month, day, days) {
        Ok(value) => println!(
            "EMA from {}-{:02}-{:02} for {} days = {}\n",
            year, month, day, days, value
        ),
        Err(e) => error!("EMA failed: {}", e),
    }
}

fn dividends_menu(analyzer: &StockAnalyzer, dividends: &Table, lines: &mut Lines<'_>) {
    println!("Enter the first year:");
    let Some(first) = read_number::<i32>(lines) else {
        return;
    };
    println!("Enter the second year:");
    let Some(second) = read_number::<i32>(lines) else {
        return;
    };

    match analyzer.average_dividends(dividends, first, second) {
        Ok(value) => println!("The average of dividends during that period = {}\n", value),
        Err(e) => error!("Average dividends failed: {}", e),
    }
}

/// Reads one line, re-prompting until it parses as a number. `None`
/// means stdin is closed.
fn read_number<T: FromStr>(lines: &mut Lines<'_>) -> Option<T> {
    loop {
        let line = read_line(lines)?;
        match line.trim().parse::<T>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

fn read_line(lines: &mut Lines<'_>) -> Option<String> {
    match lines.next()? {
        Ok(line) => Some(line),
        Err(e) => {
            warn!("Failed to read input: {}", e);
            None
        }
    }
}

fn report_unreadable(path: &str, err: LoadError) {
    error!("Failed to load {}: {}", path, err);
    println!(
        "You can't get any data, it might be due to one of these problems:\n\
         1. The file does not exist\n\
         2. The file is located in a different directory\n\
         3. The spelling of the file name is wrong"
    );
}
