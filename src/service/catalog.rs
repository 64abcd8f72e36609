use crate::db::Tool;

/// Static definition of a built-in tool. Optional text defaults to empty.
struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    seo_title: &'static str,
    seo_description: &'static str,
    long_description: &'static str,
    features: &'static [&'static str],
    use_cases: &'static [&'static str],
    steps: &'static [&'static str],
}

impl CatalogEntry {
    fn to_tool(&self) -> Tool {
        Tool {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category.to_string(),
            seo_title: self.seo_title.to_string(),
            seo_description: self.seo_description.to_string(),
            long_description: self.long_description.to_string(),
            features: owned(self.features),
            use_cases: owned(self.use_cases),
            steps: owned(self.steps),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "merge-pdf",
        name: "Merge PDF",
        description: "Combine multiple PDF files into one document.",
        category: "organize",
        seo_title: "Merge PDF Files Online - Combine PDFs for Free",
        seo_description: "Combine PDFs in the order you want with the easiest PDF merger available.",
        long_description: "Merge PDF joins any number of PDF documents into a single file while keeping the original page quality. Reorder files before merging to get exactly the layout you need.",
        features: &["Unlimited files", "Drag and drop ordering", "Keeps original quality"],
        use_cases: &["Combining invoices for accounting", "Assembling chapters of a report"],
        steps: &["Upload your PDF files", "Arrange them in the desired order", "Click Merge and download the result"],
    },
    CatalogEntry {
        id: "split-pdf",
        name: "Split PDF",
        description: "Extract pages or split a PDF into several files.",
        category: "organize",
        seo_title: "Split PDF Files Online - Extract Pages",
        seo_description: "Separate one page or a whole set for easy conversion into independent PDF files.",
        long_description: "Split PDF breaks a document into page ranges or single pages. Choose custom ranges or split every page into its own file.",
        features: &["Custom page ranges", "Split every page", "Batch download as ZIP"],
        use_cases: &["Sending only the relevant pages of a contract", "Separating scanned documents"],
        steps: &["Upload a PDF", "Choose ranges or pages to extract", "Download the split files"],
    },
    CatalogEntry {
        id: "compress-pdf",
        name: "Compress PDF",
        description: "Reduce file size while keeping the best possible quality.",
        category: "optimize",
        seo_title: "Compress PDF - Reduce PDF File Size Online",
        seo_description: "Reduce the size of your PDF without losing quality.",
        long_description: "Compress PDF optimizes images and removes redundant data so documents are small enough to email or upload.",
        features: &["Three compression levels", "Image optimization", "Preserves text quality"],
        use_cases: &["Emailing large scans", "Uploading to size-limited portals"],
        steps: &["Upload a PDF", "Pick a compression level", "Download the smaller file"],
    },
    CatalogEntry {
        id: "pdf-to-word",
        name: "PDF to Word",
        description: "Convert PDF files into editable DOCX documents.",
        category: "convert",
        seo_title: "PDF to Word Converter - Convert PDF to DOCX",
        seo_description: "Convert your PDF to an editable Word document with accurate formatting.",
        long_description: "PDF to Word turns fixed-layout PDFs into editable documents, keeping fonts, tables and images in place.",
        features: &["Accurate layout", "Editable text", "Tables preserved"],
        use_cases: &["Editing a received contract", "Reusing content from reports"],
        steps: &["Upload a PDF", "Start the conversion", "Download the DOCX file"],
    },
    CatalogEntry {
        id: "word-to-pdf",
        name: "Word to PDF",
        description: "Turn DOC and DOCX files into PDF.",
        category: "convert",
        seo_title: "Word to PDF Converter - DOCX to PDF Online",
        seo_description: "Make DOC and DOCX files easy to read by converting them to PDF.",
        long_description: "",
        features: &["Keeps formatting", "Fast conversion"],
        use_cases: &["Sharing a CV", "Publishing a final report"],
        steps: &["Upload a Word document", "Convert", "Download the PDF"],
    },
    CatalogEntry {
        id: "jpg-to-pdf",
        name: "JPG to PDF",
        description: "Convert images to a PDF document.",
        category: "convert",
        seo_title: "JPG to PDF - Convert Images to PDF Online",
        seo_description: "Convert JPG images to PDF in seconds and adjust orientation and margins.",
        long_description: "JPG to PDF packs one or more images into a document with adjustable page size, orientation and margins.",
        features: &["Multiple images per PDF", "Orientation and margin control"],
        use_cases: &["Submitting photographed receipts", "Creating a photo booklet"],
        steps: &["Upload images", "Adjust page settings", "Convert and download"],
    },
    CatalogEntry {
        id: "rotate-pdf",
        name: "Rotate PDF",
        description: "Rotate pages of a PDF document.",
        category: "edit",
        seo_title: "Rotate PDF Pages Online",
        seo_description: "Rotate your PDFs the way you need them, several at once.",
        long_description: "",
        features: &["Rotate single pages or all pages"],
        use_cases: &[],
        steps: &["Upload a PDF", "Rotate the pages", "Download the result"],
    },
    CatalogEntry {
        id: "protect-pdf",
        name: "Protect PDF",
        description: "Encrypt a PDF with a password.",
        category: "security",
        seo_title: "Protect PDF - Add a Password to a PDF",
        seo_description: "Encrypt your PDF with a password to keep sensitive data confidential.",
        long_description: "Protect PDF applies strong encryption so that only people with the password can open the document.",
        features: &["AES encryption", "Permission settings"],
        use_cases: &["Sending medical records", "Sharing financial statements"],
        steps: &["Upload a PDF", "Set a password", "Download the protected file"],
    },
    CatalogEntry {
        id: "unlock-pdf",
        name: "Unlock PDF",
        description: "Remove password protection from a PDF you own.",
        category: "security",
        seo_title: "Unlock PDF - Remove PDF Password",
        seo_description: "Remove PDF password security so you can use your PDFs as you want.",
        long_description: "",
        features: &[],
        use_cases: &["Archiving documents without passwords"],
        steps: &["Upload a protected PDF", "Enter the password", "Download the unlocked file"],
    },
    CatalogEntry {
        id: "watermark-pdf",
        name: "Add Watermark",
        description: "Stamp text or an image over PDF pages.",
        category: "edit",
        seo_title: "Add Watermark to PDF Online",
        seo_description: "Stamp an image or text over your PDF in seconds.",
        long_description: "Add Watermark places text or an image over selected pages with control over position, opacity and rotation.",
        features: &["Text or image watermark", "Opacity and position control"],
        use_cases: &["Marking drafts as confidential", "Branding shared documents"],
        steps: &["Upload a PDF", "Design the watermark", "Apply and download"],
    },
];

/// The built-in catalog loaded by the seed binary.
pub fn builtin_catalog() -> Vec<Tool> {
    CATALOG.iter().map(CatalogEntry::to_tool).collect()
}
