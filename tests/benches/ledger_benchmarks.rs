//! # Proof-of-Ledger Benchmarks
//!
//! | Subsystem | Operation |
//! |-----------|-----------|
//! | pl-03 Merkle | root and proof over 4..256 transactions |
//! | pl-07 Bloom | per-block filter build and lookup |
//! | pl-04 Ledger | apply a full signed block |
//! | pl-17 Sealer | seal at difficulty 2, sequential vs parallel |

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pl_03_merkle_commitment::{merkle_proof, merkle_root, verify_proof};
use pl_04_ledger_state::{BalanceMap, Ledger, LedgerConfig};
use pl_07_bloom_filters::{BlockFilter, BloomConfig};
use pl_17_block_production::{build_candidate, ProofOfWorkSealer, SealerConfig};
use rand::Rng;
use shared_crypto::{Ed25519KeyPair, Ed25519Verifier};
use shared_types::{InMemorySignatureStore, Transaction};

fn random_transactions(count: usize) -> Vec<Transaction> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|n| Transaction::new("alice", "bob", rng.gen_range(1..1000), n as u64))
        .collect()
}

fn genesis_ledger() -> Ledger {
    let mut ledger = Ledger::new(
        LedgerConfig::for_testing(),
        Arc::new(InMemorySignatureStore::new()),
        Arc::new(Ed25519Verifier),
    );
    let balances = BalanceMap::from([("alice".into(), u64::MAX / 2)]);
    let _ = ledger.add_genesis_at(balances, "genesis", 0);
    ledger
}

// ============================================================================
// pl-03: Merkle commitment
// ============================================================================

fn bench_merkle(c: &mut Criterion) {
    let mut group = c.benchmark_group("pl-03-merkle");

    for size in [4usize, 32, 256] {
        let txs = random_transactions(size);
        let target = txs[size / 2].tx_id();
        let root = merkle_root(&txs);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("root", size), &txs, |b, txs| {
            b.iter(|| black_box(merkle_root(txs)))
        });
        group.bench_with_input(BenchmarkId::new("proof_and_verify", size), &txs, |b, txs| {
            b.iter(|| {
                let proof = merkle_proof(txs, &target);
                black_box(verify_proof(&root, &target, &proof))
            })
        });
    }

    group.finish();
}

// ============================================================================
// pl-07: Bloom filters
// ============================================================================

fn bench_bloom(c: &mut Criterion) {
    let mut group = c.benchmark_group("pl-07-bloom");
    let ledger = genesis_ledger();
    let Some(genesis) = ledger.latest_block() else {
        return;
    };
    let block = build_candidate(genesis, "miner", random_transactions(4), 1);
    let config = BloomConfig::default();
    let Ok(filter) = BlockFilter::build(&block, &config) else {
        return;
    };
    let target = block.tx_ids()[3];

    group.bench_function("build_4_tx", |b| {
        b.iter(|| black_box(BlockFilter::build(&block, &config)))
    });
    group.bench_function("might_contain", |b| {
        b.iter(|| black_box(filter.might_contain(&target)))
    });

    group.finish();
}

// ============================================================================
// pl-04: Ledger application
// ============================================================================

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("pl-04-ledger");
    let wallet = Ed25519KeyPair::generate();
    let signed: Vec<Transaction> = random_transactions(4)
        .into_iter()
        .map(|mut tx| {
            tx.sign(&wallet);
            tx
        })
        .collect();

    group.bench_function("apply_full_block", |b| {
        b.iter_batched(
            || {
                let ledger = genesis_ledger();
                let block = ledger
                    .latest_block()
                    .map(|g| build_candidate(g, "miner", signed.clone(), 1));
                (ledger, block)
            },
            |(mut ledger, block)| {
                if let Some(block) = block {
                    black_box(ledger.apply(&block, "miner"));
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

// ============================================================================
// pl-17: Sealing
// ============================================================================

fn bench_seal(c: &mut Criterion) {
    let mut group = c.benchmark_group("pl-17-sealer");
    group.sample_size(20);
    let ledger = genesis_ledger();
    let Some(genesis) = ledger.latest_block() else {
        return;
    };
    let template = build_candidate(genesis, "miner", random_transactions(4), 1);

    for threads in [1usize, 4] {
        let Ok(sealer) = ProofOfWorkSealer::new(SealerConfig {
            max_attempts: 10_000_000,
            threads,
        }) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("difficulty_2", threads), &sealer, |b, s| {
            b.iter(|| {
                let mut block = template.clone();
                black_box(s.seal(&mut block, 2))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_merkle, bench_bloom, bench_apply, bench_seal);
criterion_main!(benches);
