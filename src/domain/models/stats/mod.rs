pub mod admin_stats;
