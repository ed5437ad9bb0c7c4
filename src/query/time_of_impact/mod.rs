pub use self::time_of_impact::{time_of_impact, TOIOptions, TOI};

mod time_of_impact;
