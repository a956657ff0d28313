use pdf2img::naming::image_name;

#[test]
fn strips_trailing_pdf_any_case() {
    assert_eq!(image_name("resume.pdf"), "resume.png");
    assert_eq!(image_name("RESUME.PDF"), "RESUME.png");
    assert_eq!(image_name("mixed.Pdf"), "mixed.png");
}

#[test]
fn appends_png_when_no_pdf_suffix() {
    assert_eq!(image_name("notes.txt"), "notes.txt.png");
    assert_eq!(image_name("archive"), "archive.png");
}

#[test]
fn only_the_trailing_suffix_is_stripped() {
    assert_eq!(image_name("report.pdf.pdf"), "report.pdf.png");
    assert_eq!(image_name("my.pdf.backup"), "my.pdf.backup.png");
}
