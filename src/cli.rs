use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "transfer_fare", version, about = "Airport transfer fare estimates and bookings")]
pub struct Cli {
    /// Configuration file name, without extension
    #[arg(short, long, default_value = "config", global = true)]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate distance, duration and fare between two known places
    Estimate {
        /// Pickup place, matched on its address
        pickup: String,
        /// Drop-off place, matched on its address
        dropoff: String,
    },

    /// List known places matching a query
    Places { query: String },

    /// Book a ride between two known places
    Book {
        pickup: String,
        dropoff: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        /// Pickup time (RFC 3339), books an instant ride when omitted
        #[arg(long)]
        scheduled: Option<DateTime<Utc>>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List booked rides, most recent first
    History,

    /// Show revenue, trip and pending counts and the latest bookings
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_estimate() {
        let cli = Cli::try_parse_from(["transfer_fare", "estimate", "cbd", "jkia"]).unwrap();

        assert_eq!(cli.config, "config");
        match cli.command {
            Commands::Estimate { pickup, dropoff } => assert_eq!((pickup.as_str(), dropoff.as_str()), ("cbd", "jkia")),
            command => panic!("Expected Estimate command, got {:?}", command),
        }
    }

    #[test]
    fn parse_scheduled_booking() {
        let args = [
            "transfer_fare",
            "-c",
            "config_test",
            "book",
            "karen",
            "wilson",
            "--name",
            "Jane Wanjiru",
            "--phone",
            "+254712345678",
            "--scheduled",
            "2026-03-02T05:00:00Z",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.config, "config_test");
        match cli.command {
            Commands::Book { scheduled, notes, .. } => {
                assert_eq!(scheduled, Some(Utc.with_ymd_and_hms(2026, 3, 2, 5, 0, 0).unwrap()));
                assert_eq!(notes, None);
            }
            command => panic!("Expected Book command, got {:?}", command),
        }
    }

    #[test]
    fn book_requires_a_name() {
        let result = Cli::try_parse_from(["transfer_fare", "book", "karen", "wilson", "--phone", "+254712345678"]);

        assert!(result.is_err());
    }
}
