use labeled_fasta::{generate_sequence, insert_label, insert_label_at, Nucleotide};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_generate_exact_length() {
    let mut rng = StdRng::seed_from_u64(7);
    for len in [0, 1, 59, 60, 61, 1000] {
        let seq = generate_sequence(len, &mut rng);
        assert_eq!(seq.len(), len);
    }
}

#[test]
fn test_generate_alphabet_only() {
    let mut rng = StdRng::seed_from_u64(42);
    let seq = generate_sequence(10_000, &mut rng);
    assert!(seq.chars().all(|c| matches!(c, 'A' | 'C' | 'G' | 'T')));

    // all four bases show up in a long sequence
    for nuc in Nucleotide::ALL {
        assert!(seq.contains(nuc.as_char()), "missing {}", nuc);
    }
}

#[test]
fn test_generate_empty() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(generate_sequence(0, &mut rng), "");
}

#[test]
fn test_generate_same_seed_same_sequence() {
    let a = generate_sequence(200, &mut StdRng::seed_from_u64(99));
    let b = generate_sequence(200, &mut StdRng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn test_insert_at_start_middle_end() {
    assert_eq!(insert_label_at("ACGT", "Bob", 0), "BobACGT");
    assert_eq!(insert_label_at("ACGT", "Bob", 2), "ACBobGT");
    assert_eq!(insert_label_at("ACGT", "Bob", 4), "ACGTBob");
}

#[test]
fn test_insert_past_end_appends() {
    assert_eq!(insert_label_at("AC", "x", 10), "ACx");
}

#[test]
fn test_insert_empty_label_and_sequence() {
    assert_eq!(insert_label_at("ACGT", "", 2), "ACGT");
    assert_eq!(insert_label_at("", "Ala", 0), "Ala");
}

#[test]
fn test_insert_label_removable_at_offset() {
    let mut rng = StdRng::seed_from_u64(2024);
    let seq = generate_sequence(50, &mut rng);
    let label = "Zażółć";

    for _ in 0..100 {
        let inserted = insert_label(&seq, label, &mut rng);
        assert!(inserted.offset <= seq.len());

        let chars: Vec<char> = inserted.sequence.chars().collect();
        let label_len = label.chars().count();
        assert_eq!(chars.len(), seq.len() + label_len);

        let found: String = chars[inserted.offset..inserted.offset + label_len].iter().collect();
        assert_eq!(found, label);

        let restored: String = chars[..inserted.offset]
            .iter()
            .chain(chars[inserted.offset + label_len..].iter())
            .collect();
        assert_eq!(restored, seq);
    }
}

#[test]
fn test_insert_offsets_cover_both_ends() {
    // offsets are drawn from the inclusive range [0, len]
    let mut rng = StdRng::seed_from_u64(5);
    let mut seen = [false; 4];
    for _ in 0..500 {
        seen[insert_label("ACG", "N", &mut rng).offset] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_insert_into_empty_sequence() {
    let mut rng = StdRng::seed_from_u64(3);
    let inserted = insert_label("", "Bob", &mut rng);
    assert_eq!(inserted.offset, 0);
    assert_eq!(inserted.sequence, "Bob");
}
