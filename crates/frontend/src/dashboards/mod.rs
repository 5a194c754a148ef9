pub mod d001_reports;

pub use d001_reports::ui::ReportsDashboard;
