use crate::types::{AddressVerifier, InputRecord, ValidationResult};
use crate::validator::validate_record;
use metrics::{counter, histogram};
use std::time::Duration;
use tracing::{info, instrument};

pub struct Pipeline;

impl Pipeline {
    /// Run every record through the verifier in contiguous batches of at
    /// most `batch_size`, in input order, pausing between batches to stay
    /// inside the service's request-rate policy. The pause is skipped after
    /// the final batch. Output order matches input order exactly; failed
    /// records come back as invalid rows, never as gaps.
    #[instrument(skip(api, records), fields(service = %api.service_name()))]
    pub async fn run(
        api: &dyn AddressVerifier,
        records: &[InputRecord],
        batch_size: usize,
        inter_batch_delay: Duration,
    ) -> Vec<ValidationResult> {
        counter!("addr_pipeline_runs_total").increment(1);
        let t_pipeline = std::time::Instant::now();

        let batch_size = batch_size.max(1);
        let total = records.len();
        let batch_count = total.div_ceil(batch_size);
        let mut results = Vec::with_capacity(total);

        for (batch_index, batch) in records.chunks(batch_size).enumerate() {
            info!(
                "Processing batch {}/{} ({} records)",
                batch_index + 1,
                batch_count,
                batch.len()
            );
            println!(
                "\n🔄 Processing batch {}/{} ({} records)...",
                batch_index + 1,
                batch_count,
                batch.len()
            );

            for record in batch {
                let result = validate_record(api, record).await;
                if result.is_valid {
                    counter!("addr_records_valid_total").increment(1);
                } else {
                    counter!("addr_records_invalid_total").increment(1);
                }
                results.push(result);
            }

            if batch_index + 1 < batch_count {
                info!("Pausing {}ms before next batch", inter_batch_delay.as_millis());
                println!(
                    "⏸️  Pausing for {}ms before next batch...",
                    inter_batch_delay.as_millis()
                );
                tokio::time::sleep(inter_batch_delay).await;
            }
        }

        let valid = results.iter().filter(|r| r.is_valid).count();
        info!(
            "✅ Validated {} records ({} valid, {} invalid)",
            total,
            valid,
            total - valid
        );
        println!(
            "\n✅ Validated {} records ({} valid, {} invalid)",
            total,
            valid,
            total - valid
        );
        histogram!("addr_pipeline_duration_seconds").record(t_pipeline.elapsed().as_secs_f64());

        results
    }
}
