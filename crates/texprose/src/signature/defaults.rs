//! Built-in command and environment signatures.
//!
//! Citation, reference and acronym commands become placeholders so the
//! surrounding sentence stays grammatical; preamble, layout and metadata
//! commands disappear entirely.

use super::Action;
use crate::placeholder::PlaceholderGenerator;

const IGNORE: Action = Action::Ignore;
const DUMMY: Action = Action::Placeholder(PlaceholderGenerator::DEFAULT);
const PLURAL: Action = Action::Placeholder(PlaceholderGenerator::PLURAL);

/// Environments whose bodies never reach the checker.
pub(crate) const IGNORED_ENVIRONMENTS: &[&str] =
    &["lstlisting", "otherlanguage", "otherlanguage*", "tikzpicture", "verbatim"];

#[rustfmt::skip]
pub(crate) const COMMANDS: &[(&str, Action)] = &[
    (r"\ac{}", DUMMY),
    (r"\Ac{}", DUMMY),
    (r"\ac[]{}", DUMMY),
    (r"\Ac[]{}", DUMMY),
    (r"\ac*{}", DUMMY),
    (r"\Ac*{}", DUMMY),
    (r"\ac*[]{}", DUMMY),
    (r"\Ac*[]{}", DUMMY),
    (r"\aca{}", DUMMY),
    (r"\Aca{}", DUMMY),
    (r"\aca[]{}", DUMMY),
    (r"\Aca[]{}", DUMMY),
    (r"\aca*{}", DUMMY),
    (r"\Aca*{}", DUMMY),
    (r"\aca*[]{}", DUMMY),
    (r"\Aca*[]{}", DUMMY),
    (r"\acap{}", DUMMY),
    (r"\Acap{}", DUMMY),
    (r"\acap[]{}", DUMMY),
    (r"\Acap[]{}", DUMMY),
    (r"\acap*{}", DUMMY),
    (r"\Acap*{}", DUMMY),
    (r"\acap*[]{}", DUMMY),
    (r"\Acap*[]{}", DUMMY),
    (r"\acf{}", DUMMY),
    (r"\Acf{}", DUMMY),
    (r"\acf[]{}", DUMMY),
    (r"\Acf[]{}", DUMMY),
    (r"\acf*{}", DUMMY),
    (r"\Acf*{}", DUMMY),
    (r"\acf*[]{}", DUMMY),
    (r"\Acf*[]{}", DUMMY),
    (r"\acfp{}", DUMMY),
    (r"\Acfp{}", DUMMY),
    (r"\acfp[]{}", DUMMY),
    (r"\Acfp[]{}", DUMMY),
    (r"\acfp*{}", DUMMY),
    (r"\Acfp*{}", DUMMY),
    (r"\acfp*[]{}", DUMMY),
    (r"\Acfp*[]{}", DUMMY),
    (r"\acl{}", DUMMY),
    (r"\Acl{}", DUMMY),
    (r"\acl[]{}", DUMMY),
    (r"\Acl[]{}", DUMMY),
    (r"\acl*{}", DUMMY),
    (r"\Acl*{}", DUMMY),
    (r"\acl*[]{}", DUMMY),
    (r"\Acl*[]{}", DUMMY),
    (r"\aclp{}", DUMMY),
    (r"\Aclp{}", DUMMY),
    (r"\aclp[]{}", DUMMY),
    (r"\Aclp[]{}", DUMMY),
    (r"\aclp*{}", DUMMY),
    (r"\Aclp*{}", DUMMY),
    (r"\aclp*[]{}", DUMMY),
    (r"\Aclp*[]{}", DUMMY),
    (r"\acp{}", DUMMY),
    (r"\Acp{}", DUMMY),
    (r"\acp[]{}", DUMMY),
    (r"\Acp[]{}", DUMMY),
    (r"\acp*{}", DUMMY),
    (r"\Acp*{}", DUMMY),
    (r"\acp*[]{}", DUMMY),
    (r"\Acp*[]{}", DUMMY),
    (r"\acreset{}", IGNORE),
    (r"\acresetall", IGNORE),
    (r"\acs{}", DUMMY),
    (r"\Acs{}", DUMMY),
    (r"\acs[]{}", DUMMY),
    (r"\Acs[]{}", DUMMY),
    (r"\acs*{}", DUMMY),
    (r"\Acs*{}", DUMMY),
    (r"\acs*[]{}", DUMMY),
    (r"\Acs*[]{}", DUMMY),
    (r"\acsetup{}", IGNORE),
    (r"\acsp{}", DUMMY),
    (r"\Acsp{}", DUMMY),
    (r"\acsp[]{}", DUMMY),
    (r"\Acsp[]{}", DUMMY),
    (r"\acsp*{}", DUMMY),
    (r"\Acsp*{}", DUMMY),
    (r"\acsp*[]{}", DUMMY),
    (r"\Acsp*[]{}", DUMMY),
    (r"\acuse{}", IGNORE),
    (r"\acuseall", IGNORE),
    (r"\addbibresource{}", IGNORE),
    (r"\addcontentsline{}{}{}", IGNORE),
    (r"\addtocontents{}", IGNORE),
    (r"\addtocounter{}{}", IGNORE),
    (r"\addtokomafont{}{}", IGNORE),
    (r"\@addtoreset{}{}", IGNORE),
    (r"\addtotheorempostheadhook{}", IGNORE),
    (r"\addxcontentsline{}{}{}", IGNORE),
    (r"\algdef{}[]{}{}", IGNORE),
    (r"\algnewcommand{}{}", IGNORE),
    (r"\algrenewcommand{}{}", IGNORE),
    (r"\arabic{}", DUMMY),
    (r"\AtBeginEnvironment{}{}", IGNORE),
    (r"\AtEndEnvironment{}{}", IGNORE),
    (r"\autocite{}", DUMMY),
    (r"\autocite[]{}", DUMMY),
    (r"\autocite[][]{}", DUMMY),
    (r"\Autocite{}", DUMMY),
    (r"\Autocite[]{}", DUMMY),
    (r"\Autocite[][]{}", DUMMY),
    (r"\autocite*{}", DUMMY),
    (r"\autocite*[]{}", DUMMY),
    (r"\autocite*[][]{}", DUMMY),
    (r"\Autocite*{}", DUMMY),
    (r"\Autocite*[]{}", DUMMY),
    (r"\Autocite*[][]{}", DUMMY),
    (r"\autocites{}", PLURAL),
    (r"\autocites{}{}", PLURAL),
    (r"\autocites{}{}{}", PLURAL),
    (r"\autocites{}{}{}{}", PLURAL),
    (r"\autocites{}{}{}{}{}", PLURAL),
    (r"\autocites()()[][]{}", PLURAL),
    (r"\autocites()()[][]{}[][]{}", PLURAL),
    (r"\autocites()()[][]{}[][]{}[][]{}", PLURAL),
    (r"\autocites()()[][]{}[][]{}[][]{}[][]{}", PLURAL),
    (r"\autocites()()[][]{}[][]{}[][]{}[][]{}[][]{}", PLURAL),
    (r"\Autocites{}", PLURAL),
    (r"\Autocites{}{}", PLURAL),
    (r"\Autocites{}{}{}", PLURAL),
    (r"\Autocites{}{}{}{}", PLURAL),
    (r"\Autocites{}{}{}{}{}", PLURAL),
    (r"\Autocites()()[][]{}", PLURAL),
    (r"\Autocites()()[][]{}[][]{}", PLURAL),
    (r"\Autocites()()[][]{}[][]{}[][]{}", PLURAL),
    (r"\Autocites()()[][]{}[][]{}[][]{}[][]{}", PLURAL),
    (r"\Autocites()()[][]{}[][]{}[][]{}[][]{}[][]{}", PLURAL),
    (r"\automark{}", IGNORE),
    (r"\automark[]{}", IGNORE),
    (r"\automark*{}", IGNORE),
    (r"\automark*[]{}", IGNORE),
    (r"\autopageref{}", DUMMY),
    (r"\autopageref*{}", DUMMY),
    (r"\autoref{}", DUMMY),
    (r"\autoref*{}", DUMMY),
    (r"\babeltags{}", IGNORE),
    (r"\bibitem{}", IGNORE),
    (r"\bibliography{}", IGNORE),
    (r"\bibliographystyle{}", IGNORE),
    (r"\captionof{}", IGNORE),
    (r"\captionsetup{}", IGNORE),
    (r"\captionsetup[]{}", IGNORE),
    (r"\cite{}", DUMMY),
    (r"\cite[]{}", DUMMY),
    (r"\cite[][]{}", DUMMY),
    (r"\Cite{}", DUMMY),
    (r"\Cite[]{}", DUMMY),
    (r"\Cite[][]{}", DUMMY),
    (r"\cite*{}", DUMMY),
    (r"\cite*[]{}", DUMMY),
    (r"\cite*[][]{}", DUMMY),
    (r"\citealp{}", DUMMY),
    (r"\citealp[]{}", DUMMY),
    (r"\citealp*{}", DUMMY),
    (r"\citealp*[]{}", DUMMY),
    (r"\citealt{}", DUMMY),
    (r"\citealt[]{}", DUMMY),
    (r"\citealt*{}", DUMMY),
    (r"\citealt*[]{}", DUMMY),
    (r"\citeauthor{}", DUMMY),
    (r"\citeauthor[]{}", DUMMY),
    (r"\citeauthor[][]{}", DUMMY),
    (r"\Citeauthor{}", DUMMY),
    (r"\Citeauthor[]{}", DUMMY),
    (r"\Citeauthor[][]{}", DUMMY),
    (r"\citeauthor*{}", DUMMY),
    (r"\citeauthor*[]{}", DUMMY),
    (r"\citeauthor*[][]{}", DUMMY),
    (r"\Citeauthor*{}", DUMMY),
    (r"\Citeauthor*[]{}", DUMMY),
    (r"\Citeauthor*[][]{}", DUMMY),
    (r"\citedate{}", DUMMY),
    (r"\citedate[]{}", DUMMY),
    (r"\citedate[][]{}", DUMMY),
    (r"\citedate*{}", DUMMY),
    (r"\citedate*[]{}", DUMMY),
    (r"\citedate*[][]{}", DUMMY),
    (r"\citep{}", DUMMY),
    (r"\citep[]{}", DUMMY),
    (r"\citep*{}", DUMMY),
    (r"\citep*[]{}", DUMMY),
    (r"\cites{}", PLURAL),
    (r"\cites{}{}", PLURAL),
    (r"\cites{}{}{}", PLURAL),
    (r"\cites{}{}{}{}", PLURAL),
    (r"\cites{}{}{}{}{}", PLURAL),
    (r"\cites()()[][]{}", PLURAL),
    (r"\cites()()[][]{}[][]{}", PLURAL),
    (r"\cites()()[][]{}[][]{}[][]{}", PLURAL),
    (r"\cites()()[][]{}[][]{}[][]{}[][]{}", PLURAL),
    (r"\cites()()[][]{}[][]{}[][]{}[][]{}[][]{}", PLURAL),
    (r"\Cites{}", PLURAL),
    (r"\Cites{}{}", PLURAL),
    (r"\Cites{}{}{}", PLURAL),
    (r"\Cites{}{}{}{}", PLURAL),
    (r"\Cites{}{}{}{}{}", PLURAL),
    (r"\Cites()()[][]{}", PLURAL),
    (r"\Cites()()[][]{}[][]{}", PLURAL),
    (r"\Cites()()[][]{}[][]{}[][]{}", PLURAL),
    (r"\Cites()()[][]{}[][]{}[][]{}[][]{}", PLURAL),
    (r"\Cites()()[][]{}[][]{}[][]{}[][]{}[][]{}", PLURAL),
    (r"\citet{}", DUMMY),
    (r"\citet[]{}", DUMMY),
    (r"\citet*{}", DUMMY),
    (r"\citet*[]{}", DUMMY),
    (r"\citetitle{}", DUMMY),
    (r"\citetitle[]{}", DUMMY),
    (r"\citetitle[][]{}", DUMMY),
    (r"\citetitle*{}", DUMMY),
    (r"\citetitle*[]{}", DUMMY),
    (r"\citetitle*[][]{}", DUMMY),
    (r"\citeurl{}", DUMMY),
    (r"\citeurl[]{}", DUMMY),
    (r"\citeurl[][]{}", DUMMY),
    (r"\citeyear{}", DUMMY),
    (r"\citeyear[]{}", DUMMY),
    (r"\citeyear[][]{}", DUMMY),
    (r"\citeyear*{}", DUMMY),
    (r"\citeyear*[]{}", DUMMY),
    (r"\citeyear*[][]{}", DUMMY),
    (r"\clearfield{}", IGNORE),
    (r"\color{}", IGNORE),
    (r"\color[]{}", IGNORE),
    (r"\colorbox{}", IGNORE),
    (r"\colorlet{}{}", IGNORE),
    (r"\cref{}", DUMMY),
    (r"\Cref{}", DUMMY),
    (r"\crefname{}{}{}", IGNORE),
    (r"\Crefname{}{}{}", IGNORE),
    (r"\DeclareAcronym{}{}", IGNORE),
    (r"\DeclareCaptionFormat{}{}", IGNORE),
    (r"\DeclareCaptionLabelFormat{}{}", IGNORE),
    (r"\DeclareCiteCommand{}{}{}{}{}", IGNORE),
    (r"\DeclareCiteCommand{}[]{}{}{}{}", IGNORE),
    (r"\DeclareFieldFormat{}{}", IGNORE),
    (r"\DeclareFieldFormat[]{}{}", IGNORE),
    (r"\DeclareFieldFormat*{}{}", IGNORE),
    (r"\DeclareGraphicsExtensions{}", IGNORE),
    (r"\DeclareMathAlphabet{}{}{}{}{}", IGNORE),
    (r"\DeclareMathOperator{}{}", IGNORE),
    (r"\DeclareMathOperator*{}{}", IGNORE),
    (r"\DeclareNameAlias{}{}", IGNORE),
    (r"\DeclareNewTOC{}", IGNORE),
    (r"\DeclareNewTOC[]{}", IGNORE),
    (r"\DeclareSIUnit{}{}", IGNORE),
    (r"\DeclareSIUnit[]{}{}", IGNORE),
    (r"\declaretheorem{}", IGNORE),
    (r"\declaretheorem[]{}", IGNORE),
    (r"\declaretheoremstyle{}", IGNORE),
    (r"\declaretheoremstyle[]{}", IGNORE),
    (r"\DeclareTOCStyleEntry{}", IGNORE),
    (r"\DeclareTOCStyleEntry[]{}{}", IGNORE),
    (r"\defbibcheck{}{}", IGNORE),
    (r"\defbibenvironment{}{}{}{}", IGNORE),
    (r"\defbibfilter{}{}", IGNORE),
    (r"\defbibheading{}{}", IGNORE),
    (r"\defbibheading{}[]{}", IGNORE),
    (r"\defbibnote{}{}", IGNORE),
    (r"\definecolor{}{}{}", IGNORE),
    (r"\definespotcolor{}{}{}", IGNORE),
    (r"\directlua{}", IGNORE),
    (r"\DisableLigatures{}", IGNORE),
    (r"\documentclass{}", IGNORE),
    (r"\documentclass[]{}", IGNORE),
    (r"\email{}", DUMMY),
    (r"\enlargethispage{}", IGNORE),
    (r"\eqref{}", DUMMY),
    (r"\etocsetlevel{}{}", IGNORE),
    (r"\etocsetnexttocdepth{}", IGNORE),
    (r"\etocsettocstyle{}{}", IGNORE),
    (r"\fcolorbox{}", IGNORE),
    (r"\floatname{}{}", IGNORE),
    (r"\floatstyle{}", IGNORE),
    (r"\footcite{}", DUMMY),
    (r"\footcite[]{}", DUMMY),
    (r"\footcite[][]{}", DUMMY),
    (r"\footcitetext{}", DUMMY),
    (r"\footcitetext[]{}", DUMMY),
    (r"\footcitetext[][]{}", DUMMY),
    (r"\footnote{}", IGNORE),
    (r"\footnote[]{}", IGNORE),
    (r"\foreignlanguage{}{}", DUMMY),
    (r"\foreignlanguage[]{}{}", DUMMY),
    (r"\GenericWarning{}{}", IGNORE),
    (r"\geometry{}", IGNORE),
    (r"\glsaddstoragekey{}{}{}", IGNORE),
    (r"\graphicspath{}", IGNORE),
    (r"\href{}{}", DUMMY),
    (r"\hyperref[]", IGNORE),
    (r"\hypersetup{}", IGNORE),
    (r"\iac{}", DUMMY),
    (r"\Iac{}", DUMMY),
    (r"\iac[]{}", DUMMY),
    (r"\Iac[]{}", DUMMY),
    (r"\iac*{}", DUMMY),
    (r"\Iac*{}", DUMMY),
    (r"\iac*[]{}", DUMMY),
    (r"\Iac*[]{}", DUMMY),
    (r"\iaca{}", DUMMY),
    (r"\Iaca{}", DUMMY),
    (r"\iaca[]{}", DUMMY),
    (r"\Iaca[]{}", DUMMY),
    (r"\iaca*{}", DUMMY),
    (r"\Iaca*{}", DUMMY),
    (r"\iaca*[]{}", DUMMY),
    (r"\Iaca*[]{}", DUMMY),
    (r"\iacf{}", DUMMY),
    (r"\Iacf{}", DUMMY),
    (r"\iacf[]{}", DUMMY),
    (r"\Iacf[]{}", DUMMY),
    (r"\iacf*{}", DUMMY),
    (r"\Iacf*{}", DUMMY),
    (r"\iacf*[]{}", DUMMY),
    (r"\Iacf*[]{}", DUMMY),
    (r"\iacl{}", DUMMY),
    (r"\Iacl{}", DUMMY),
    (r"\iacl[]{}", DUMMY),
    (r"\Iacl[]{}", DUMMY),
    (r"\iacl*{}", DUMMY),
    (r"\Iacl*{}", DUMMY),
    (r"\iacl*[]{}", DUMMY),
    (r"\Iacl*[]{}", DUMMY),
    (r"\iacs{}", DUMMY),
    (r"\Iacs{}", DUMMY),
    (r"\iacs[]{}", DUMMY),
    (r"\Iacs[]{}", DUMMY),
    (r"\iacs*{}", DUMMY),
    (r"\Iacs*{}", DUMMY),
    (r"\iacs*[]{}", DUMMY),
    (r"\Iacs*[]{}", DUMMY),
    (r"\ifcurrentfield{}", IGNORE),
    (r"\ifentrytype{}", IGNORE),
    (r"\@ifpackageloaded{}", IGNORE),
    (r"\iftoggle{}", IGNORE),
    (r"\include{}", IGNORE),
    (r"\includegraphics{}", IGNORE),
    (r"\includegraphics[]{}", IGNORE),
    (r"\includepdf{}", IGNORE),
    (r"\includepdf[]{}", IGNORE),
    (r"\input{}", IGNORE),
    (r"\KOMAoptions{}", IGNORE),
    (r"\KOMAScript", DUMMY),
    (r"\label{}", IGNORE),
    (r"\LaTeX", DUMMY),
    (r"\lettrine{}{}", DUMMY),
    (r"\lettrine[]{}{}", DUMMY),
    (r"\linespread{}", IGNORE),
    (r"\luadirect{}", IGNORE),
    (r"\luaexec{}", IGNORE),
    (r"\mdfdefinestyle{}{}", IGNORE),
    (r"\multicolumn{}{}", IGNORE),
    (r"\multirow{}{}", IGNORE),
    (r"\newboolean{}", IGNORE),
    (r"\newcolumntype{}{}", IGNORE),
    (r"\newcommand{}{}", IGNORE),
    (r"\newcommand{}[]{}", IGNORE),
    (r"\newcommand{}[][]{}", IGNORE),
    (r"\newcommand*{}{}", IGNORE),
    (r"\newcommand*{}[]{}", IGNORE),
    (r"\newcommand*{}[][]{}", IGNORE),
    (r"\newcounter{}", IGNORE),
    (r"\newenvironment{}{}{}", IGNORE),
    (r"\newenvironment{}[]{}{}", IGNORE),
    (r"\newenvironment*{}{}{}", IGNORE),
    (r"\newenvironment*{}[]{}{}", IGNORE),
    (r"\newfloat{}{}{}", IGNORE),
    (r"\newfloat{}{}{}[]", IGNORE),
    (r"\newgeometry{}", IGNORE),
    (r"\newglossaryentry{}{}", IGNORE),
    (r"\newglossarystyle{}{}", IGNORE),
    (r"\newrefcontext[]", IGNORE),
    (r"\newtheorem{}{}", IGNORE),
    (r"\newtheorem{}{}[]", IGNORE),
    (r"\newtheorem{}[]{}", IGNORE),
    (r"\newtheorem{}[]{}[]", IGNORE),
    (r"\newtheorem*{}{}", IGNORE),
    (r"\newtoggle{}", IGNORE),
    (r"\nolinkurl{}", DUMMY),
    (r"\PackageWarning{}{}", IGNORE),
    (r"\pagecolor{}", IGNORE),
    (r"\pagenumbering{}", IGNORE),
    (r"\pageref{}", DUMMY),
    (r"\pageref*{}", DUMMY),
    (r"\pagestyle{}", IGNORE),
    (r"\parencite{}", DUMMY),
    (r"\parencite[]{}", DUMMY),
    (r"\parencite[][]{}", DUMMY),
    (r"\parencite*{}", DUMMY),
    (r"\parencite*[]{}", DUMMY),
    (r"\parencite*[][]{}", DUMMY),
    (r"\Parencite{}", DUMMY),
    (r"\Parencite[]{}", DUMMY),
    (r"\Parencite[][]{}", DUMMY),
    (r"\pdfbookmark{}{}", IGNORE),
    (r"\pdfbookmark[]{}{}", IGNORE),
    (r"\pgfdeclaredecoration{}{}{}", IGNORE),
    (r"\pgfmathsetseed{}", IGNORE),
    (r"\printacronyms", IGNORE),
    (r"\printacronyms[]", IGNORE),
    (r"\printbibliography", IGNORE),
    (r"\printbibliography[]", IGNORE),
    (r"\printglossary", IGNORE),
    (r"\printglossary[]", IGNORE),
    (r"\providecommand{}{}", IGNORE),
    (r"\providecommand{}[]{}", IGNORE),
    (r"\providecommand*{}{}", IGNORE),
    (r"\providecommand*{}[]{}", IGNORE),
    (r"\raisebox{}", IGNORE),
    (r"\RedeclareSectionCommand{}", IGNORE),
    (r"\RedeclareSectionCommand[]{}", IGNORE),
    (r"\RedeclareSectionCommands{}", IGNORE),
    (r"\RedeclareSectionCommands[]{}", IGNORE),
    (r"\ref{}", DUMMY),
    (r"\ref*{}", DUMMY),
    (r"\renewbibmacro{}{}", IGNORE),
    (r"\renewbibmacro*{}{}", IGNORE),
    (r"\renewcommand{}{}", IGNORE),
    (r"\renewcommand{}[]{}", IGNORE),
    (r"\renewcommand{}[][]{}", IGNORE),
    (r"\renewcommand*{}{}", IGNORE),
    (r"\renewcommand*{}[]{}", IGNORE),
    (r"\renewcommand*{}[][]{}", IGNORE),
    (r"\renewenvironment{}{}{}", IGNORE),
    (r"\renewenvironment{}[]{}{}", IGNORE),
    (r"\renewenvironment*{}{}{}", IGNORE),
    (r"\renewenvironment*{}[]{}{}", IGNORE),
    (r"\renewlist{}{}{}", IGNORE),
    (r"\RequirePackage{}", IGNORE),
    (r"\scalebox{}", IGNORE),
    (r"\selectlanguage{}", IGNORE),
    (r"\setboolean{}", IGNORE),
    (r"\setcopyright{}", IGNORE),
    (r"\setcounter{}{}", IGNORE),
    (r"\setenumerate{}", IGNORE),
    (r"\setglossarystyle{}", IGNORE),
    (r"\setitemize{}", IGNORE),
    (r"\setkomafont{}{}", IGNORE),
    (r"\setkomavar{}{}", IGNORE),
    (r"\setkomavar{}[]{}", IGNORE),
    (r"\setkomavar*{}{}", IGNORE),
    (r"\setkomavar*{}[]{}", IGNORE),
    (r"\setlength{}{}", IGNORE),
    (r"\setlist{}", IGNORE),
    (r"\setlist[]{}", IGNORE),
    (r"\SetMathAlphabet{}{}{}{}{}{}", IGNORE),
    (r"\setparsizes{}{}{}", IGNORE),
    (r"\@setplength{}{}", IGNORE),
    (r"\setstretch{}", IGNORE),
    (r"\setuptoc{}{}", IGNORE),
    (r"\sisetup{}", IGNORE),
    (r"\smartcite{}", DUMMY),
    (r"\smartcite[]{}", DUMMY),
    (r"\smartcite[][]{}", DUMMY),
    (r"\Smartcite{}", DUMMY),
    (r"\Smartcite[]{}", DUMMY),
    (r"\Smartcite[][]{}", DUMMY),
    (r"\stepcounter{}", IGNORE),
    (r"\supercite{}", DUMMY),
    (r"\SweaveInput{}", IGNORE),
    (r"\SweaveOpts{}", IGNORE),
    (r"\SweaveSyntax{}", IGNORE),
    (r"\TeX", DUMMY),
    (r"\textcite{}", DUMMY),
    (r"\textcite[]{}", DUMMY),
    (r"\textcite[][]{}", DUMMY),
    (r"\Textcite{}", DUMMY),
    (r"\Textcite[]{}", DUMMY),
    (r"\Textcite[][]{}", DUMMY),
    (r"\textcites{}", PLURAL),
    (r"\textcites{}{}", PLURAL),
    (r"\textcites{}{}{}", PLURAL),
    (r"\textcites{}{}{}{}", PLURAL),
    (r"\textcites{}{}{}{}{}", PLURAL),
    (r"\textcites()()[][]{}", PLURAL),
    (r"\textcites()()[][]{}[][]{}", PLURAL),
    (r"\textcites()()[][]{}[][]{}[][]{}", PLURAL),
    (r"\textcites()()[][]{}[][]{}[][]{}[][]{}", PLURAL),
    (r"\textcites()()[][]{}[][]{}[][]{}[][]{}[][]{}", PLURAL),
    (r"\Textcites{}", PLURAL),
    (r"\Textcites{}{}", PLURAL),
    (r"\Textcites{}{}{}", PLURAL),
    (r"\Textcites{}{}{}{}", PLURAL),
    (r"\Textcites{}{}{}{}{}", PLURAL),
    (r"\Textcites()()[][]{}", PLURAL),
    (r"\Textcites()()[][]{}[][]{}", PLURAL),
    (r"\Textcites()()[][]{}[][]{}[][]{}", PLURAL),
    (r"\Textcites()()[][]{}[][]{}[][]{}[][]{}", PLURAL),
    (r"\Textcites()()[][]{}[][]{}[][]{}[][]{}[][]{}", PLURAL),
    (r"\textcolor{}", IGNORE),
    (r"\textcolor[]{}", IGNORE),
    (r"\textproc{}", DUMMY),
    (r"\theoremstyle{}", IGNORE),
    (r"\thispagestyle{}", IGNORE),
    (r"\tikz{}", IGNORE),
    (r"\tikzset{}", IGNORE),
    (r"\todo{}", IGNORE),
    (r"\todo[]{}", IGNORE),
    (r"\togglefalse{}", IGNORE),
    (r"\toggletrue{}", IGNORE),
    (r"\unsettoc{}{}", IGNORE),
    (r"\url{}", DUMMY),
    (r"\usebibmacro{}", IGNORE),
    (r"\usekomafont{}", IGNORE),
    (r"\usepackage{}", IGNORE),
    (r"\usepackage[]{}", IGNORE),
    (r"\usetikzlibrary{}", IGNORE),
    (r"\value{}", IGNORE),
    (r"\vspace{}", IGNORE),
    (r"\vspace*{}", IGNORE),
    (r"\WarningFilter{}{}", IGNORE),
];
