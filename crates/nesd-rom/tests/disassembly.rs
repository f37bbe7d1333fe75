use nesd_rom::{
    disassembler::{Instruction, TraceAnalysis},
    CartridgeError,
    NesRom,
    RomParseError,
    TraceOrder,
};

/// iNES image with a mapper-0 header around `prg` and one bank of CHR ROM.
fn ines(prg: &[u8]) -> Vec<u8> {
    let mut bytes = b"NES\x1a".to_vec();
    bytes.extend_from_slice(&[(prg.len() / 0x4000) as u8, 1, 0, 0, 0]);
    bytes.resize(0x10, 0);
    bytes.extend_from_slice(prg);
    bytes.extend(std::iter::repeat(0).take(0x2000));
    bytes
}

/// 32 KiB program filled with `fill`, with `code` placed at `$8000` and every vector set to `$8000`.
fn program(fill: u8, code: &[u8]) -> Vec<u8> {
    let mut prg = vec![fill; 0x8000];
    prg[..code.len()].copy_from_slice(code);
    prg[0x7FFA..].copy_from_slice(&[0x00, 0x80, 0x00, 0x80, 0x00, 0x80]);
    prg
}

fn load(prg: &[u8]) -> NesRom {
    NesRom::from_bytes(&ines(prg)).unwrap()
}

/// Every address covered by a traced instruction, operand bytes included.
fn covered(rom: &NesRom, analysis: &TraceAnalysis) -> Vec<u16> {
    let mut addrs: Vec<u16> = analysis
        .marks
        .iter()
        .flat_map(|pc| {
            let size = Instruction::fetch(&rom.memory, pc).size() as u16;
            (0..size).map(move |i| pc.wrapping_add(i))
        })
        .collect();
    addrs.sort_unstable();
    addrs.dedup();
    addrs
}

#[test]
fn test_straight_line_program_is_all_code() {
    let rom = load(&program(0xEA, &[]));
    let analysis = rom.trace(TraceOrder::Fifo);

    for pc in 0x8000..=0xFFFA {
        assert!(analysis.is_code(pc), "${pc:04X} not traced");
    }
    // The vector bytes decode as `brk` followed by an undefined opcode.
    assert!(!analysis.is_code(0xFFFB));
    assert_eq!(analysis.labels.iter().collect::<Vec<_>>(), [0x8000]);

    let listing = rom.disassemble(TraceOrder::Fifo);
    assert!(listing.starts_with("\n\nnmi:\n    nop                 ; $8000\n"));
    assert_eq!(listing.matches(":\n").count(), 2);
    assert_eq!(listing.matches(".byte").count(), 1);
    assert!(listing.ends_with("    brk                 ; $fffa\n\n\nLFFFB:\n.byte $80,$00,$80,$00,$80\n\n"));
}

#[test]
fn test_jump_target_is_labelled() {
    let mut prg = program(0xFF, &[0x4C, 0x00, 0x90]);
    prg[0x1000] = 0x60;
    let rom = load(&prg);
    let analysis = rom.trace(TraceOrder::Fifo);

    assert_eq!(covered(&rom, &analysis), [0x8000, 0x8001, 0x8002, 0x9000]);
    assert!(analysis.labels.contains(0x9000));

    let listing = rom.disassemble(TraceOrder::Fifo);
    assert!(listing.contains("    jmp L9000           ; $8000\n"));
    assert!(listing.contains("\n\nL9000:\n    rts                 ; $9000\n"));
    assert!(!listing.contains("$9000 "));
}

#[test]
fn test_bad_magic_is_rejected() {
    let mut bytes = ines(&program(0xEA, &[]));
    bytes[..4].copy_from_slice(b"NES\x00");
    let err = NesRom::from_bytes(&bytes).err().unwrap();
    assert!(matches!(err, RomParseError::BadCartridge(CartridgeError::BadMagic(_))));
    assert!(err.to_string().starts_with("Unrecognized file format"));
}

#[test]
fn test_missing_file_reports_os_error_once() {
    let err = NesRom::from_file("/nonexistent/game.nes").err().unwrap();
    let os_error = match &err {
        RomParseError::IoError(io_err) => io_err.to_string(),
        other => panic!("unexpected error: {other}"),
    };
    assert_eq!(err.to_string(), "File IO Error");

    let line = format!("{:#}", anyhow::Error::new(err).context("Cannot load game.nes"));
    assert_eq!(line, format!("Cannot load game.nes: File IO Error: {os_error}"));
}

#[test]
fn test_absolute_operand_below_program_window_is_not_labelled() {
    let rom = load(&program(0xFF, &[0xAD, 0x00, 0x70, 0x60]));
    let analysis = rom.trace(TraceOrder::Fifo);

    assert!(analysis.is_code(0x8000));
    assert!(!analysis.labels.contains(0x7000));
    assert!(rom.disassemble(TraceOrder::Fifo).contains("    lda $7000           ; $8000\n"));
}

#[test]
fn test_unsupported_mapper() {
    let mut bytes = ines(&program(0xEA, &[]));
    bytes[6] = 0x10;
    let err = NesRom::from_bytes(&bytes).err().unwrap();
    assert!(matches!(err, RomParseError::UnsupportedMapper(1)));
    assert_eq!(err.to_string(), "Mapper 1 not currently supported");
}

#[test]
fn test_single_bank_program_mapped_at_c000() {
    let mut prg = vec![0x60u8; 0x4000];
    prg[0x3FFA..].copy_from_slice(&[0x00, 0xC0, 0x01, 0xC0, 0x02, 0xC0]);
    let rom = load(&prg);
    assert_eq!(rom.memory.base(), 0xC000);

    let listing = rom.disassemble(TraceOrder::Lifo);
    assert!(listing.starts_with(
        "\n\nnmi:\n    rts                 ; $c000\n\n\nreset:\n    rts                 ; $c001\n\n\nirq:\n    rts                 ; $c002\n"
    ));
}

#[test]
fn test_call_and_branch_listing() {
    let code = [
        0xA2, 0x08, // ldx #$08
        0xCA, // dex
        0xD0, 0xFD, // bne $8002
        0x20, 0x0C, 0x80, // jsr $800c
        0x6C, 0xFC, 0xFF, // jmp ($fffc)
        0xFF, // undefined
        0x9D, 0x00, 0x02, // sta $0200,x
        0x60, // rts
    ];
    let rom = load(&program(0xFF, &code));
    let listing = rom.disassemble(TraceOrder::Fifo);

    let expected = concat!(
        "\n\nnmi:\n",
        "    ldx #$08            ; $8000\n",
        "\n\nL8002:\n",
        "    dex                 ; $8002\n",
        "    bne L8002           ; $8003\n",
        "    jsr L800C           ; $8005\n",
        "    jmp ($fffc)         ; $8008\n",
        "\n\nL800B:\n",
        ".byte $ff",
        "\n\nL800C:\n",
        "    sta $0200,x         ; $800c\n",
        "    rts                 ; $800f\n",
        "\n\nL8010:\n",
        ".byte $ff,$ff,",
    );
    assert!(listing.starts_with(expected), "{}", &listing[..expected.len().min(listing.len())]);
}

#[test]
fn test_output_is_identical_across_runs_and_orders() {
    let code = [0x20, 0x06, 0x80, 0x4C, 0x00, 0x80, 0xB0, 0x02, 0x60, 0xFF, 0xE8, 0x60];
    let rom = load(&program(0xFF, &code));
    let first = rom.disassemble(TraceOrder::Fifo);
    assert_eq!(first, rom.disassemble(TraceOrder::Fifo));
    assert_eq!(first, rom.disassemble(TraceOrder::Lifo));
    assert_eq!(first, load(&program(0xFF, &code)).disassemble(TraceOrder::Fifo));
}
