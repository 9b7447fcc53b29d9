#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use pixdiff_ppm::pixdiff_core::bytestream::ByteCursor;
    use pixdiff_ppm::pixdiff_core::options::DecoderOptions;

    // keep the fuzzer away from gigabyte sized allocations
    let options = DecoderOptions::default()
        .set_max_width(1024)
        .set_max_height(1024);

    let mut decoder = pixdiff_ppm::PpmDecoder::new_with_options(ByteCursor::new(data), options);
    let _ = decoder.decode();
});
