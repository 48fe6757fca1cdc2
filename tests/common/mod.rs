#![allow(dead_code)]

use artwork_normalizer::prelude::*;

pub const EXPORT_HEADER_LINE: &str = "id\tuser_id\tuser_name\tstatus\tart_work_name\tart_work_url_name\tsell_design_approval_status\tis_public";

/// Rows as they arrive when a spreadsheet range is pasted.
pub const PASTED_ROWS: &str = "\
日本語 Sunset iPhone Case\t1001, 1002
Line Sheet\tAirPods Cover\t1003 1004
Sunset phone case\t1005
just a heading
Duplicate\t1001
";

pub fn service() -> NormalizerService {
    NormalizerService::new(NormalizerOptions::default())
}

pub fn service_with(apostrophes: ApostrophePolicy, suffix_start: SuffixStart) -> NormalizerService {
    NormalizerService::new(NormalizerOptions {
        apostrophes,
        suffix_start,
        keyword_substitutions: true,
    })
}

pub fn operator() -> OperatorIdentity {
    OperatorIdentity::new("42", "Jo Bloggs").unwrap()
}

pub fn ids(identifiers: &[Identifier]) -> Vec<&str> {
    identifiers.iter().map(Identifier::as_str).collect()
}

pub fn slugs(records: &[ArtworkRecord]) -> Vec<&str> {
    records.iter().map(|record| record.slug.as_str()).collect()
}
