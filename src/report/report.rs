use std::io::Write;
use log::{debug, warn};
use serde_json::json;
use crate::address::structs::address_key::AddressKey;
use crate::address::structs::network_prefix::NetworkPrefix;
use crate::aggregator::enums::host_field::HostField;
use crate::aggregator::enums::network_field::NetworkField;
use crate::aggregator::structs::log_aggregator::LogAggregator;
use crate::aggregator::structs::network_summary::NetworkSummary;
use crate::common::structs::custom_error::CustomError;
use crate::record::structs::record::Record;
use crate::report::enums::output_format::OutputFormat;
use crate::report::enums::query_mode::QueryMode;

pub const NETWORK_NOT_FOUND: &str = "network not found";

/// Reads the query arguments for `mode` from `input`, runs the query and
/// writes the result to `out`.
pub fn answer<W: Write>(aggregator: &LogAggregator, mode: QueryMode, format: OutputFormat, input: &str, out: &mut W) -> Result<(), CustomError>
{
    let mut tokens = input.split_whitespace();
    let written = match mode {
        QueryMode::Networks => {
            let count = match tokens.next() {
                None => 0,
                Some(text) => text.parse::<usize>()
                    .map_err(|_| CustomError::new(&format!("Expected a query count, got '{text}'")))?,
            };
            let queries: Vec<&str> = tokens.by_ref().take(count).collect();
            if queries.len() < count {
                warn!("[QUERY] Expected {count} prefixes, got {}", queries.len());
            }
            let results: Vec<(String, Option<NetworkSummary>)> = queries.iter()
                .map(|query| (query.to_string(), aggregator.query_network(query)))
                .collect();
            write_network_summaries(out, format, &results)
        }
        QueryMode::Busiest => {
            let networks = aggregator.query_extreme_networks(NetworkField::HostCount);
            let hosts = aggregator.query_extreme_hosts(HostField::EntryCount);
            write_extremes(out, format, &networks, &hosts)
        }
        QueryMode::Range => {
            let mut bound = || -> Result<AddressKey, CustomError> {
                let text = tokens.next().ok_or_else(|| CustomError::new("Expected two addresses for the range query"))?;
                AddressKey::parse(text).map_err(|e| CustomError::new(&e.to_string()))
            };
            let low = bound()?;
            let high = bound()?;
            let records = aggregator.query_host_range(low, high);
            write_range(out, format, &records)
        }
        QueryMode::Sorted => {
            let records = aggregator.query_all_sorted();
            write_sorted(out, format, &records)
        }
    };
    written.map_err(|e| CustomError::new(&format!("Unable to write the report: {e}")))?;
    debug!("[REPORT] {mode:?} written as {format:?}");
    Ok(())
}

/// Text: prefix, access count, host count and the sorted hosts, one per line;
/// an unknown prefix prints the query and `network not found`.
pub fn write_network_summaries<W: Write>(out: &mut W, format: OutputFormat, results: &[(String, Option<NetworkSummary>)]) -> std::io::Result<()>
{
    match format {
        OutputFormat::Text => {
            for (index, (query, summary)) in results.iter().enumerate() {
                if index > 0 {
                    writeln!(out)?;
                }
                match summary {
                    None => {
                        writeln!(out, "{query}")?;
                        writeln!(out, "{NETWORK_NOT_FOUND}")?;
                    }
                    Some(summary) => {
                        writeln!(out, "{}", summary.prefix)?;
                        writeln!(out, "{}", summary.access_count)?;
                        writeln!(out, "{}", summary.host_count)?;
                        for host in &summary.sorted_hosts {
                            writeln!(out, "{host}")?;
                        }
                    }
                }
            }
        }
        OutputFormat::Json => {
            let values: Vec<serde_json::Value> = results.iter()
                .map(|(query, summary)| match summary {
                    None => json!({ "query": query, "found": false }),
                    Some(summary) => json!({
                        "query": query,
                        "found": true,
                        "prefix": summary.prefix,
                        "access_count": summary.access_count,
                        "host_count": summary.host_count,
                        "sorted_hosts": summary.sorted_hosts,
                    }),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &values)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn write_extremes<W: Write>(out: &mut W, format: OutputFormat, networks: &[NetworkPrefix], hosts: &[AddressKey]) -> std::io::Result<()>
{
    match format {
        OutputFormat::Text => {
            for network in networks {
                writeln!(out, "{network}")?;
            }
            writeln!(out)?;
            for host in hosts {
                writeln!(out, "{host}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &json!({ "networks": networks, "hosts": hosts }))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// `records` arrive in ascending range order and are written descending.
pub fn write_range<W: Write>(out: &mut W, format: OutputFormat, records: &[&Record]) -> std::io::Result<()>
{
    match format {
        OutputFormat::Text => {
            for record in records.iter().rev() {
                writeln!(out, "{}", record.original_line)?;
            }
        }
        OutputFormat::Json => {
            let descending: Vec<&Record> = records.iter().rev().copied().collect();
            serde_json::to_writer_pretty(&mut *out, &descending)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Writes `records` in the order given, ascending for range-ordered input.
pub fn write_sorted<W: Write>(out: &mut W, format: OutputFormat, records: &[&Record]) -> std::io::Result<()>
{
    match format {
        OutputFormat::Text => {
            for record in records {
                writeln!(out, "{}", record.original_line)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
