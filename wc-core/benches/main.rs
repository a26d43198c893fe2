use wc_core::client::MsgCrypt;
use wc_core::test::{TestSetup, NONCE, TIMESTAMP};

use rand::{CryptoRng, RngCore};

use criterion::*;

fn bench_roundtrip<Rng: RngCore + CryptoRng>(crypt: &MsgCrypt, plain: &[u8], rng: &mut Rng) {
    let msg = crypt
        .encrypt_and_sign(rng, plain, TIMESTAMP, NONCE, crypt.receiver_id())
        .unwrap();

    crypt
        .verify_and_decrypt(
            &msg.signature,
            TIMESTAMP,
            NONCE,
            &msg.encrypt,
            Some(crypt.receiver_id()),
        )
        .unwrap();
}

fn rand_vec(length: usize) -> Vec<u8> {
    (0..length).map(|_| rand::random::<u8>()).collect()
}

fn bench(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let setup = TestSetup::new();

    let mut group = c.benchmark_group("throughput-roundtrip");

    // Callback bodies are small, the platform limits them to a few KiB.
    for blen in [6, 8, 10, 12, 14] {
        let input = rand_vec(1 << blen);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(format!("roundtrip {} B", input.len()), |b| {
            b.iter(|| bench_roundtrip(&setup.crypt, &input, &mut rng))
        });
    }

    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
