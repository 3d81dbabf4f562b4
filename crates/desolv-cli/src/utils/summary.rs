use desolv::workflows::analyze::FileAnalysis;
use desolv::workflows::report::AnalysisSummary;
use std::collections::BTreeMap;
use std::fmt::Write;

pub fn format_analysis(analysis: &FileAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Structure: {}", analysis.name);
    let _ = writeln!(out, "  Atoms:             {}", analysis.atom_count);
    let _ = writeln!(out, "  Compounds:         {}", analysis.compound_count);
    let _ = writeln!(out, "  Chains:            {}", analysis.chain_count);
    let _ = writeln!(out, "  Helices:           {}", analysis.helix_count);
    let _ = writeln!(out, "  Sheets:            {}", analysis.sheet_count);
    let _ = writeln!(out, "  Adjacent pairs:    {}", analysis.adjacent_pair_count);
    let _ = writeln!(out, "  Phospho sites:     {}", analysis.phospho_site_count);
    match analysis.dehydron_count {
        Some(count) => {
            let _ = writeln!(out, "  Dehydrons:         {}", count);
            let _ = writeln!(out, "  Associations:      {}", analysis.associations.len());
            if analysis.skipped_count > 0 {
                let _ = writeln!(out, "  Skipped checks:    {}", analysis.skipped_count);
            }
        }
        None => {
            let _ = writeln!(out, "  Dehydrons:         (no annotation file)");
        }
    }
    out.push_str(&format_residue_counts(&analysis.residue_counts));
    out
}

pub fn format_summary(summary: &AnalysisSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Files analyzed:      {}", summary.files_processed);
    let _ = writeln!(out, "Files failed:        {}", summary.files_failed);
    let _ = writeln!(out, "Phospho sites:       {}", summary.total_phospho_sites);
    let _ = writeln!(out, "Dehydrons:           {}", summary.total_dehydrons);
    let _ = writeln!(out, "Associations:        {}", summary.total_associations);
    out.push_str(&format_residue_counts(&summary.residue_counts));
    out
}

fn format_residue_counts(counts: &BTreeMap<String, usize>) -> String {
    let mut out = String::new();
    if counts.is_empty() {
        return out;
    }
    let _ = writeln!(out, "  Residue counts:");
    for (name, count) in counts {
        let _ = writeln!(out, "    {:<5} {}", name, count);
    }
    out
}
