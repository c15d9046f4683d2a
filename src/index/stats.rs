use crate::index::quotes::StructuredQuoteMatcher;
use crate::index::substring::SubstringIndexer;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Summary of the loaded search sources
#[derive(Debug, Clone)]
pub struct SourceStats {
    pub corpus_bytes: usize,
    pub suffix_count: usize,
    pub index_bytes: usize,
    pub context_radius: usize,
    pub quote_count: usize,
    pub work_count: usize,
    pub speaker_count: usize,
    /// Works ordered by quote count, largest first
    pub quotes_per_work: Vec<(String, usize)>,
}

impl SourceStats {
    pub fn collect(indexer: &SubstringIndexer, matcher: &StructuredQuoteMatcher) -> Self {
        let sa = indexer.stats();
        let records = matcher.records();

        let mut per_work: HashMap<&str, usize> = HashMap::new();
        let mut speakers = HashSet::new();
        for record in records {
            *per_work.entry(record.title.as_str()).or_insert(0) += 1;
            speakers.insert(record.speaker.as_str());
        }

        let mut quotes_per_work: Vec<(String, usize)> = per_work
            .into_iter()
            .map(|(title, count)| (title.to_string(), count))
            .collect();
        quotes_per_work.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            corpus_bytes: sa.text_size,
            suffix_count: sa.suffix_count,
            index_bytes: sa.index_bytes,
            context_radius: indexer.context_radius(),
            quote_count: records.len(),
            work_count: quotes_per_work.len(),
            speaker_count: speakers.len(),
            quotes_per_work,
        }
    }
}

/// Display source statistics
pub fn show_stats(
    indexer: &SubstringIndexer,
    matcher: &StructuredQuoteMatcher,
    load_time: Duration,
) {
    let stats = SourceStats::collect(indexer, matcher);

    println!("Search Statistics");
    println!("=================");
    println!();
    println!("Corpus size:      {}", format_size(stats.corpus_bytes as u64));
    println!("Suffix count:     {}", stats.suffix_count);
    println!("Index size:       {}", format_size(stats.index_bytes as u64));
    println!("Context radius:   {} bytes", stats.context_radius);
    println!();
    println!("Quote count:      {}", stats.quote_count);
    println!("Works:            {}", stats.work_count);
    println!("Speakers:         {}", stats.speaker_count);

    if !stats.quotes_per_work.is_empty() {
        println!();
        println!("Quotes by work:");
        for (title, count) in stats.quotes_per_work.iter().take(15) {
            println!("  {:30} {}", title, count);
        }

        if stats.quotes_per_work.len() > 15 {
            println!("  ... and {} more", stats.quotes_per_work.len() - 15);
        }
    }

    println!();
    println!("Load time:        {:.2}s", load_time.as_secs_f64());
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
