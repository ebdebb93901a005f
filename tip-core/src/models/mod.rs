mod tip_breakdown;

pub use tip_breakdown::TipBreakdown;
