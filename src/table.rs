use pad::PadStr;

pub struct Table {
    ncol: usize,
    rows: Vec<Vec<String>>,
    headless: bool,
}

impl Table {
    pub fn with_capacity(size: usize, headless: bool) -> Table {
        Table {
            ncol: 0,
            rows: Vec::with_capacity(size),
            headless,
        }
    }

    /// The first row added is the title row, dropped when headless.
    pub fn add(&mut self, row: Vec<String>) {
        if self.ncol == 0 {
            self.ncol = row.len();
            if self.headless {
                return;
            }
        }
        debug_assert_eq!(row.len(), self.ncol, "unexpected row len");
        self.rows.push(row);
    }

    pub fn render(self) -> String {
        let mut pads = vec![0_usize; self.ncol];
        for row in self.rows.iter() {
            for (coli, cell) in row.iter().enumerate().take(self.ncol) {
                let size = console::measure_text_width(cell);
                if size > pads[coli] {
                    pads[coli] = size;
                }
            }
        }

        let mut split = String::from("+");
        for pad in pads.iter() {
            for _ in 0..*pad + 2 {
                split.push('-');
            }
            split.push('+');
        }

        let mut out = String::new();
        for (rowi, row) in self.rows.into_iter().enumerate() {
            if rowi == 0 {
                out.push_str(&split);
                out.push('\n');
            }
            out.push('|');
            for (coli, cell) in row.into_iter().enumerate().take(self.ncol) {
                let pad = pads[coli];
                let text = cell.pad_to_width_with_alignment(pad, pad::Alignment::Left);
                out.push_str(&format!(" {text} |"));
            }
            out.push('\n');

            if !self.headless && rowi == 0 {
                out.push_str(&split);
                out.push('\n');
            }
        }

        out.push_str(&split);
        out
    }

    pub fn show(self) {
        println!("{}", self.render());
    }
}
