use criterion::Criterion;

use num_bigint::BigUint;
use rand::{Rng, SeedableRng, XorShiftRng};
use rescue_prime::derivation::bn254_parameters;
use rescue_prime::{
    rescue_prime_hash_sequence, rescue_prime_hash_text, rescue_xlix_permutation,
    RescuePrimeParams,
};

fn init_rng() -> XorShiftRng {
    const TEST_SEED: [u32; 4] = [0x5dbe6259, 0x8d313d76, 0x3237db17, 0xe5bc0654];
    XorShiftRng::from_seed(TEST_SEED)
}

fn test_inputs(params: &RescuePrimeParams, count: usize) -> Vec<BigUint> {
    let rng = &mut init_rng();
    let mut inputs = vec![];
    for _ in 0..count {
        inputs.push(BigUint::from(rng.gen::<u64>()) % params.p());
    }
    inputs
}

fn bench_rescue_prime_permutation(crit: &mut Criterion) {
    let params = bn254_parameters();
    let state = test_inputs(&params, params.state_width());
    crit.bench_function("RescuePrime Permutation", |b| {
        b.iter(|| {
            let mut state = state.clone();
            rescue_xlix_permutation(&params, &mut state);
        });
    });
}

fn bench_rescue_prime_hash_sequence(crit: &mut Criterion) {
    let params = bn254_parameters();
    let inputs = test_inputs(&params, 8);
    crit.bench_function("RescuePrime Hash of 8 field elements", |b| {
        b.iter(|| rescue_prime_hash_sequence(&params, &inputs));
    });
}

fn bench_rescue_prime_hash_text(crit: &mut Criterion) {
    let params = bn254_parameters();
    crit.bench_function("RescuePrime Hash of a short string", |b| {
        b.iter(|| rescue_prime_hash_text(&params, "The quick brown fox"));
    });
}

pub fn group(crit: &mut Criterion) {
    bench_rescue_prime_permutation(crit);
    bench_rescue_prime_hash_sequence(crit);
    bench_rescue_prime_hash_text(crit);
}
