macro_rules! debug_group {
    ($representative: expr, $members: expr) => {
        tracing::debug!(
            "{STAGE} - {} name(s) grouped under {:?}",
            $members.len(),
            $representative
        );
    };
}
pub(crate) use debug_group;

macro_rules! trace_score {
    ($query: expr, $candidate: expr, $score: expr) => {
        tracing::trace!(
            "{STAGE} - {:?} vs {:?}: {:.2}",
            $query,
            $candidate,
            $score
        );
    };
}
pub(crate) use trace_score;

macro_rules! warn_no_names {
    () => {
        tracing::warn!("{STAGE} - No game names found");
    };
}
pub(crate) use warn_no_names;
