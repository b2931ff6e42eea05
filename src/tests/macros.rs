macro_rules! trace_capture {
    () => {
        use tracing_subscriber::filter::{LevelFilter, Targets};
        use tracing_subscriber::prelude::*;

        let targets = Targets::new()
            .with_target("bingo_index::tests", LevelFilter::TRACE)
            .with_target("bingo_index::index", LevelFilter::TRACE)
            .with_target("bingo_index::record", LevelFilter::DEBUG);

        let formatter = tracing_subscriber::fmt::layer().with_test_writer();

        let _guard = tracing_subscriber::registry()
            .with(targets)
            .with(formatter)
            .set_default();
    };
}

pub(super) use trace_capture;
